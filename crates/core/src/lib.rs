//! `playbill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the statement error model and the money value object.

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{StatementError, StatementResult};
pub use money::Cents;
pub use value_object::ValueObject;
