//! calckit - accumulator and Fibonacci demo utilities
//!
//! Two independent, stateless utilities make up the library: a running-total
//! [`Accumulator`] and a checked [`fibonacci`] sequence function, plus the
//! small generic [`Container`] and greeting helpers the original demo
//! carried. The `cli` module wires them into the `calckit` binary.

pub mod accumulator;
pub mod cli;
pub mod constants;
pub mod container;
pub mod error;
pub mod fib;
pub mod greeting;
pub mod output;

// Re-export commonly used types
pub use accumulator::Accumulator;
pub use container::Container;
pub use error::{CalcKitError, Result};
pub use fib::{fibonacci, fibonacci_sequence};
pub use greeting::{greet, greeting};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
