//! Add command - fold increments into an accumulator

use crate::accumulator::Accumulator;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

/// Result of an `add` invocation
#[derive(Debug, Serialize)]
pub struct AddReport {
    pub initial: i64,
    pub increments: Vec<i64>,
    pub value: i64,
}

/// Apply `increments` to an accumulator starting at `initial`.
pub fn run_add(initial: i64, increments: &[i64]) -> Result<AddReport> {
    debug!(initial, count = increments.len(), "running add");

    let mut acc = Accumulator::new(initial);
    acc.apply(increments.iter().copied())?;

    Ok(AddReport {
        initial,
        increments: increments.to_vec(),
        value: acc.value(),
    })
}

/// Print the report: JSON on stdout, or a single result line.
pub fn print_add(report: &AddReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        crate::info_print!(
            "Applied {} increment(s) to {}",
            report.increments.len(),
            report.initial
        );
        println!("Result: {}", report.value.to_string().bold());
    }
    Ok(())
}
