//! Central constants for calckit
//!
//! Literals shared between the demo command, the library defaults, and the
//! tests are defined here to keep the observable demo output in one place.

/// Greeting line printed by the demo command
pub const GREETING: &str = "Hello from Rust!";

/// Initial accumulator value used by the demo
pub const DEMO_INITIAL_VALUE: i64 = 10;

/// Increment applied by the demo
pub const DEMO_INCREMENT: i64 = 5;

/// Fibonacci index computed by the demo
pub const DEMO_FIB_INDEX: i64 = 10;

/// Item the demo stores in its container
pub const DEMO_CONTAINER_ITEM: i64 = 42;

/// Largest Fibonacci index whose value fits in a signed 64-bit integer.
///
/// fib(92) = 7_540_113_804_746_346_429 < i64::MAX, fib(93) does not fit.
/// Requests beyond this index fail with an overflow error rather than wrap.
pub const MAX_FIB_INDEX: i64 = 92;
