//! Command-line interface for calckit
//!
//! Subcommands map one-to-one onto the library operations; each one builds a
//! serializable report so `--json` and the human-readable rendering share the
//! same data.

pub mod add;
pub mod demo;
pub mod fib;

use clap::{Parser, Subcommand};

/// CLI arguments for calckit
#[derive(Parser)]
#[command(name = "calckit")]
#[command(about = "Accumulator and Fibonacci demo utilities")]
#[command(version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Emit results as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands; `demo` is the default when none is given
#[derive(Subcommand)]
pub enum Commands {
    /// Run the classic demonstration (accumulator plus Fibonacci)
    Demo,
    /// Build an accumulator from an initial value and apply increments
    Add {
        /// Starting value
        #[arg(value_name = "INITIAL", allow_hyphen_values = true)]
        initial: i64,

        /// Increments applied in order
        #[arg(value_name = "N", allow_hyphen_values = true)]
        increments: Vec<i64>,
    },
    /// Compute the n-th Fibonacci number
    Fib {
        /// Index into the sequence (0-based)
        #[arg(value_name = "N", allow_hyphen_values = true)]
        n: i64,

        /// Print every term from 0 through n, one per line
        #[arg(long)]
        sequence: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_reports_library_version() {
        assert_eq!(Cli::command().get_version(), Some(crate::VERSION));
    }
}
