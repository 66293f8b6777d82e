//! Statement builder: the single entry point from raw inputs to renderable data.

use serde::Serialize;

use playbill_core::{Cents, StatementResult, ValueObject};

use crate::aggregate::{Totals, aggregate};
use crate::catalog::{Invoice, PlayCatalog};
use crate::enrich::{EnrichedPerformance, enrich};

/// Everything a renderer needs, computed once.
///
/// Only [`build_statement`] constructs this, so the totals always equal the
/// sums over `performances`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementData<'a> {
    customer: String,
    performances: Vec<EnrichedPerformance<'a>>,
    totals: Totals,
}

impl ValueObject for StatementData<'_> {}

impl<'a> StatementData<'a> {
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Enriched performances, in invoice order.
    pub fn performances(&self) -> &[EnrichedPerformance<'a>] {
        &self.performances
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn total_amount(&self) -> Cents {
        self.totals.amount
    }

    pub fn total_credits(&self) -> u64 {
        self.totals.credits
    }
}

/// Build a statement for `invoice`, pricing against `catalog`.
///
/// Propagates `MissingPlay` / `UnknownGenre` unchanged; no partial statement is
/// ever returned.
pub fn build_statement<'a>(
    invoice: &Invoice,
    catalog: &'a PlayCatalog,
) -> StatementResult<StatementData<'a>> {
    let performances = enrich(&invoice.performances, catalog)?;
    let totals = aggregate(&performances);

    tracing::debug!(
        customer = %invoice.customer,
        performances = performances.len(),
        total_amount = totals.amount.value(),
        total_credits = totals.credits,
        "statement built"
    );

    Ok(StatementData {
        customer: invoice.customer.clone(),
        performances,
        totals,
    })
}
