use super::Renderer;
use crate::aggregate::Totals;
use crate::enrich::EnrichedPerformance;

/// Plain-text statement, one `\n`-terminated line per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn header(&self, customer: &str) -> String {
        format!("Statement for {customer}\n")
    }

    fn line(&self, performance: &EnrichedPerformance<'_>) -> String {
        format!(
            "  {}: {} ({} seats)\n",
            performance.play.name, performance.amount, performance.audience
        )
    }

    fn footer(&self, totals: Totals) -> String {
        format!(
            "Amount owed is {}\nYou earned {} credits\n",
            totals.amount, totals.credits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_statement;
    use crate::catalog::{Invoice, Performance, Play, PlayCatalog};

    #[test]
    fn renders_the_classic_statement() {
        let catalog = PlayCatalog::new()
            .with_play("hamlet", Play::new("Hamlet", "tragedy"))
            .with_play("as-like", Play::new("As You Like It", "comedy"))
            .with_play("othello", Play::new("Othello", "tragedy"));
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );
        let data = build_statement(&invoice, &catalog).unwrap();

        assert_eq!(
            PlainTextRenderer.render(&data),
            "Statement for BigCo\n\
             \x20 Hamlet: $650.00 (55 seats)\n\
             \x20 As You Like It: $580.00 (35 seats)\n\
             \x20 Othello: $500.00 (40 seats)\n\
             Amount owed is $1730.00\n\
             You earned 47 credits\n"
        );
    }

    #[test]
    fn empty_statement_has_only_header_and_totals() {
        let catalog = PlayCatalog::new();
        let data = build_statement(&Invoice::new("Nobody", vec![]), &catalog).unwrap();

        assert_eq!(
            PlainTextRenderer.render(&data),
            "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits\n"
        );
    }
}
