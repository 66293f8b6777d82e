//! `playbill` command-line front end.
//!
//! Reads the box office JSON exports, builds one statement per invoice, and
//! writes the rendered statements to an output stream.

pub mod config;
pub mod input;

use std::io::Write;

use anyhow::{Context, bail};
use playbill_statement::{Invoice, PlayCatalog, build_statement, render};

pub use config::Config;

/// Load inputs, then render every selected invoice into `out`.
///
/// The first invoice that cannot be priced aborts the run.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let invoices = input::load_invoices(&config.invoices)?;
    let catalog = input::load_catalog(&config.plays)?;
    log_inputs(&invoices, &catalog);

    let selected: Vec<&Invoice> = invoices
        .iter()
        .filter(|invoice| {
            config
                .customer
                .as_deref()
                .is_none_or(|customer| invoice.customer == customer)
        })
        .collect();

    if let Some(customer) = &config.customer {
        if selected.is_empty() {
            bail!("no invoice found for customer '{customer}'");
        }
    }

    for (i, invoice) in selected.iter().enumerate() {
        let data = build_statement(invoice, &catalog).with_context(|| {
            format!("failed to build statement for customer '{}'", invoice.customer)
        })?;

        if i > 0 {
            writeln!(out)?;
        }
        out.write_all(render(&data, config.format).as_bytes())?;
    }

    out.flush()?;
    tracing::info!(
        statements = selected.len(),
        format = %config.format,
        "statements rendered"
    );
    Ok(())
}

fn log_inputs(invoices: &[Invoice], catalog: &PlayCatalog) {
    for invoice in invoices {
        tracing::info!(
            customer = %invoice.customer,
            performances = invoice.performances.len(),
            "invoice loaded"
        );
        for performance in &invoice.performances {
            tracing::debug!(
                customer = %invoice.customer,
                play_id = %performance.play_id,
                audience = performance.audience,
                "performance loaded"
            );
        }
    }

    for (play_id, play) in catalog.iter() {
        tracing::info!(play_id, name = %play.name, genre = %play.genre, "play loaded");
    }
}
