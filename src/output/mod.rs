//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Aligned text output with colors
//!
//! JSON output is the serde form of [`NetworkDetails`].

mod csv;
mod terminal;

pub use csv::{format_csv, format_csv_row, CSV_HEADER};
pub use terminal::{format_details, format_field};

use crate::config::OutputFormat;
use crate::models::NetworkDetails;
use std::error::Error;

/// Render results in the requested format.
pub fn render(details: &NetworkDetails, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => format_details(details),
        OutputFormat::Csv => format_csv(details),
        OutputFormat::Json => serde_json::to_string_pretty(details)
            .map_err(|e| format!("Error serializing JSON: {e}"))?,
    };
    Ok(out)
}

/// Print results to stdout.
pub fn print_details(details: &NetworkDetails, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start print_details() {}/{} as {:?}",
        details.network_address,
        details.cidr,
        format
    );
    println!("{}", render(details, format)?);
    Ok(())
}
