//! Output formats for [`StatementData`].
//!
//! Every renderer shares one traversal (header, one line per performance in
//! order, footer) and supplies only the templates. Renderers see nothing but
//! the statement: no catalog, no pricing, no IO. They cannot fail.

use core::fmt;
use core::str::FromStr;

use crate::aggregate::Totals;
use crate::builder::StatementData;
use crate::enrich::EnrichedPerformance;

mod html;
mod plain_text;

pub use html::HtmlRenderer;
pub use plain_text::PlainTextRenderer;

/// A statement output format.
pub trait Renderer {
    /// Opening section, given the customer name.
    fn header(&self, customer: &str) -> String;

    /// One performance line.
    fn line(&self, performance: &EnrichedPerformance<'_>) -> String;

    /// Closing section, given the statement totals.
    fn footer(&self, totals: Totals) -> String;

    fn render(&self, data: &StatementData<'_>) -> String {
        let mut out = self.header(data.customer());
        for performance in data.performances() {
            out.push_str(&self.line(performance));
        }
        out.push_str(&self.footer(data.totals()));
        out
    }
}

/// Built-in output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    PlainText,
    Html,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::PlainText => "text",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::PlainText),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format '{other}' (expected: text, html)")),
        }
    }
}

pub fn render_plain_text(data: &StatementData<'_>) -> String {
    PlainTextRenderer.render(data)
}

pub fn render_html(data: &StatementData<'_>) -> String {
    HtmlRenderer.render(data)
}

/// Render `data` in the chosen format.
pub fn render(data: &StatementData<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::PlainText => render_plain_text(data),
        OutputFormat::Html => render_html(data),
    }
}
