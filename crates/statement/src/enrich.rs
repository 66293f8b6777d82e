//! Enrichment: attach play, charge and credits to each raw performance.

use serde::Serialize;

use playbill_core::{Cents, StatementResult, ValueObject};

use crate::catalog::{Performance, Play, PlayCatalog};
use crate::pricing::Genre;

/// A priced, credited performance.
///
/// Derived entirely from one [`Performance`], the catalog, and the pricing
/// rules. Never mutated after enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedPerformance<'a> {
    pub play: &'a Play,
    pub audience: u32,
    pub amount: Cents,
    pub credits: u64,
}

impl ValueObject for EnrichedPerformance<'_> {}

impl<'a> EnrichedPerformance<'a> {
    /// Price a single performance against the catalog.
    pub fn price(performance: &Performance, catalog: &'a PlayCatalog) -> StatementResult<Self> {
        let play = catalog.resolve(&performance.play_id)?;
        let genre: Genre = play.genre.parse()?;

        Ok(Self {
            play,
            audience: performance.audience,
            amount: genre.amount(performance.audience),
            credits: genre.credits(performance.audience),
        })
    }
}

/// Enrich every performance, preserving input order.
///
/// Fail-fast: the first `MissingPlay` or `UnknownGenre` aborts the whole
/// enrichment, so a statement is never silently missing a line.
pub fn enrich<'a>(
    performances: &[Performance],
    catalog: &'a PlayCatalog,
) -> StatementResult<Vec<EnrichedPerformance<'a>>> {
    performances
        .iter()
        .enumerate()
        .map(|(line_no, performance)| -> StatementResult<EnrichedPerformance<'a>> {
            let enriched = EnrichedPerformance::price(performance, catalog)?;
            tracing::trace!(
                line_no,
                play_id = %performance.play_id,
                audience = enriched.audience,
                amount = enriched.amount.value(),
                credits = enriched.credits,
                "performance priced"
            );
            Ok(enriched)
        })
        .collect()
}
