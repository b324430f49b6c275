//! Demo command - reproduce the original demonstration output

use crate::accumulator::Accumulator;
use crate::constants::{DEMO_CONTAINER_ITEM, DEMO_FIB_INDEX, DEMO_INCREMENT, DEMO_INITIAL_VALUE};
use crate::container::Container;
use crate::error::Result;
use crate::fib::fibonacci;
use crate::greeting::greeting;
use serde::Serialize;
use tracing::debug;

/// Everything the demo computes, in one report
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub greeting: &'static str,
    pub initial_value: i64,
    pub increment: i64,
    pub result: i64,
    pub fibonacci_index: i64,
    pub fibonacci_value: i64,
    pub container_len: usize,
}

/// Run the fixed demo scenario: accumulate 10 + 5, compute fib(10),
/// store one item in a container.
pub fn run_demo() -> Result<DemoReport> {
    debug!("running demo scenario");

    let mut acc = Accumulator::new(DEMO_INITIAL_VALUE);
    acc.add(DEMO_INCREMENT)?;

    let fib_value = fibonacci(DEMO_FIB_INDEX)?;

    let mut container = Container::new();
    container.add(DEMO_CONTAINER_ITEM);

    Ok(DemoReport {
        greeting: greeting(),
        initial_value: DEMO_INITIAL_VALUE,
        increment: DEMO_INCREMENT,
        result: acc.value(),
        fibonacci_index: DEMO_FIB_INDEX,
        fibonacci_value: fib_value,
        container_len: container.len(),
    })
}

/// Print the report: JSON on stdout, or the original three demo lines.
pub fn print_demo(report: &DemoReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report.greeting);
        println!("Result: {}", report.result);
        println!("Fibonacci({}): {}", report.fibonacci_index, report.fibonacci_value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report_values() {
        let report = run_demo().unwrap();
        assert_eq!(report.greeting, "Hello from Rust!");
        assert_eq!(report.result, 15);
        assert_eq!(report.fibonacci_index, 10);
        assert_eq!(report.fibonacci_value, 55);
    }

    #[test]
    fn test_demo_stores_one_container_item() {
        // The original demo drops a single value into its container
        let report = run_demo().unwrap();
        assert_eq!(report.container_len, 1);
    }

    #[test]
    fn test_demo_report_serializes() {
        let report = run_demo().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"result\":15"));
        assert!(json.contains("\"fibonacci_value\":55"));
    }
}
