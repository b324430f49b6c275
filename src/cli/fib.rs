//! Fib command - compute Fibonacci numbers

use crate::error::Result;
use crate::fib::{fibonacci, fibonacci_sequence};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

/// Result of a `fib` invocation
#[derive(Debug, Serialize)]
pub struct FibReport {
    pub index: i64,
    pub value: i64,
    /// Terms 0..=index, present only when `--sequence` was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Vec<i64>>,
}

/// Compute fib(n), optionally collecting every term up to it.
pub fn run_fib(n: i64, sequence: bool) -> Result<FibReport> {
    debug!(index = n, sequence, "running fib");

    let value = fibonacci(n)?;
    let terms = sequence.then(|| fibonacci_sequence(n as usize + 1).collect());

    Ok(FibReport {
        index: n,
        value,
        sequence: terms,
    })
}

/// Print the report: JSON on stdout, or one line per requested term.
pub fn print_fib(report: &FibReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if let Some(terms) = &report.sequence {
        for (i, term) in terms.iter().enumerate() {
            println!("Fibonacci({}): {}", i, term);
        }
    } else {
        println!(
            "Fibonacci({}): {}",
            report.index,
            report.value.to_string().bold()
        );
    }
    Ok(())
}
