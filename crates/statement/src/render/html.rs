use std::borrow::Cow;

use super::Renderer;
use crate::aggregate::Totals;
use crate::enrich::EnrichedPerformance;

/// HTML statement: heading, a table of performances, and two total paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn header(&self, customer: &str) -> String {
        format!(
            "<h1>Statement for {}</h1>\n<table>\n<tr><th>play</th><th>seats</th><th>cost</th></tr>\n",
            escape(customer)
        )
    }

    fn line(&self, performance: &EnrichedPerformance<'_>) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&performance.play.name),
            performance.audience,
            performance.amount
        )
    }

    fn footer(&self, totals: Totals) -> String {
        format!(
            "</table>\n<p>Amount owed is <em>{}</em></p>\n<p>You earned <em>{}</em> credits</p>\n",
            totals.amount, totals.credits
        )
    }
}

/// Escape text for HTML element content. Borrows when nothing needs escaping.
fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
