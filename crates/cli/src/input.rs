//! Loading invoices and the play catalog from JSON files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use playbill_statement::{Invoice, PlayCatalog};

pub fn load_invoices(path: &Path) -> anyhow::Result<Vec<Invoice>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read invoices from {}", path.display()))?;
    parse_invoices(&raw).with_context(|| format!("invalid invoices file {}", path.display()))
}

pub fn load_catalog(path: &Path) -> anyhow::Result<PlayCatalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read plays from {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("invalid plays file {}", path.display()))
}

pub fn parse_invoices(json: &str) -> anyhow::Result<Vec<Invoice>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_catalog(json: &str) -> anyhow::Result<PlayCatalog> {
    Ok(serde_json::from_str(json)?)
}
