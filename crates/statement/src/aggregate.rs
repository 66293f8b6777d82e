//! Aggregation of enriched performances into statement totals.

use serde::Serialize;

use playbill_core::{Cents, ValueObject};

use crate::enrich::EnrichedPerformance;

/// Statement totals.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub amount: Cents,
    pub credits: u64,
}

impl ValueObject for Totals {}

impl Totals {
    fn add(self, performance: &EnrichedPerformance<'_>) -> Self {
        Self {
            amount: self.amount + performance.amount,
            credits: self.credits + performance.credits,
        }
    }
}

/// Sum charges and credits. An empty sequence yields zero totals.
pub fn aggregate(performances: &[EnrichedPerformance<'_>]) -> Totals {
    performances.iter().fold(Totals::default(), Totals::add)
}
