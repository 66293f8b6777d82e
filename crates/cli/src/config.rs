//! Command-line configuration. Every flag except `--customer` can also be set
//! through a `PLAYBILL_*` environment variable.

use std::path::PathBuf;

use clap::Parser;
use playbill_observability::LogFormat;
use playbill_statement::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "playbill", version, about = "Render theater billing statements")]
pub struct Config {
    /// JSON array of invoices
    #[arg(long, env = "PLAYBILL_INVOICES", default_value = "data/invoices.json")]
    pub invoices: PathBuf,

    /// JSON object mapping play id to {name, type}
    #[arg(long, env = "PLAYBILL_PLAYS", default_value = "data/plays.json")]
    pub plays: PathBuf,

    /// Output format: text or html
    #[arg(long, env = "PLAYBILL_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Only render invoices for this customer
    #[arg(long)]
    pub customer: Option<String>,

    /// Log format: json or pretty
    #[arg(long, env = "PLAYBILL_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "playbill",
            "--invoices",
            "in.json",
            "--plays",
            "plays.json",
            "--format",
            "html",
            "--customer",
            "BigCo",
            "--log-format",
            "pretty",
        ])
        .unwrap();

        assert_eq!(config.invoices, PathBuf::from("in.json"));
        assert_eq!(config.plays, PathBuf::from("plays.json"));
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.customer.as_deref(), Some("BigCo"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Config::try_parse_from(["playbill", "--format", "pdf"]).is_err());
    }
}
