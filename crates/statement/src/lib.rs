//! Theater billing statements.
//!
//! A statement is computed once and rendered many ways:
//!
//! `Invoice + PlayCatalog -> enrich -> aggregate -> StatementData -> Renderer -> String`
//!
//! Everything here is deterministic domain logic (no IO, no CLI, no storage).
//! Renderers depend only on [`StatementData`]; adding an output format never
//! touches pricing, enrichment or aggregation.

pub mod aggregate;
pub mod builder;
pub mod catalog;
pub mod enrich;
pub mod pricing;
pub mod render;

pub use aggregate::{Totals, aggregate};
pub use builder::{StatementData, build_statement};
pub use catalog::{Invoice, Performance, Play, PlayCatalog};
pub use enrich::{EnrichedPerformance, enrich};
pub use pricing::{Genre, amount_for, credits_for};
pub use render::{
    HtmlRenderer, OutputFormat, PlainTextRenderer, Renderer, render, render_html,
    render_plain_text,
};

pub use playbill_core::{Cents, StatementError, StatementResult};
