use calckit::cli::{add, demo, fib, Cli, Commands};
use calckit::output::set_quiet;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

// Exit codes for scripting
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    set_quiet(cli.quiet);

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        process::exit(EXIT_ERROR);
    }

    process::exit(EXIT_SUCCESS);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // No subcommand runs the classic demo, matching the original binary
    match cli.command.as_ref().unwrap_or(&Commands::Demo) {
        Commands::Demo => {
            let report = demo::run_demo()?;
            demo::print_demo(&report, cli.json)?;
        }
        Commands::Add {
            initial,
            increments,
        } => {
            let report = add::run_add(*initial, increments)?;
            add::print_add(&report, cli.json)?;
        }
        Commands::Fib { n, sequence } => {
            let report = fib::run_fib(*n, *sequence)?;
            fib::print_fib(&report, cli.json)?;
        }
    }

    Ok(())
}

/// Initialize tracing to stderr; `--verbose` lowers the filter to debug.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "calckit=debug" } else { "calckit=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
