//! Fibonacci sequence function
//!
//! Reproduces the observable behavior of the naive recursive definition
//! (`fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`) with an
//! iterative kernel so large indices stay cheap. Outputs are identical to
//! the recursive definition for every valid index; the tests check the two
//! against each other.

use crate::constants::MAX_FIB_INDEX;
use crate::error::{CalcKitError, Result};
use tracing::{debug, warn};

/// Compute the n-th Fibonacci number.
///
/// Negative indices are rejected with [`CalcKitError::InvalidInput`].
/// Indices above [`MAX_FIB_INDEX`] do not fit in an `i64` and are rejected
/// with [`CalcKitError::Overflow`].
pub fn fibonacci(n: i64) -> Result<i64> {
    if n < 0 {
        warn!(index = n, "fibonacci index rejected, negative");
        return Err(CalcKitError::invalid_input(format!(
            "fibonacci index must be non-negative, got {n}"
        )));
    }
    if n > MAX_FIB_INDEX {
        warn!(index = n, "fibonacci index rejected, exceeds i64 range");
        return Err(CalcKitError::overflow(format!(
            "fibonacci({n}) exceeds i64 range (max index {MAX_FIB_INDEX})"
        )));
    }

    let mut prev: i64 = 0;
    let mut curr: i64 = 1;
    for _ in 0..n {
        // Cannot overflow for n <= MAX_FIB_INDEX, but keep the arithmetic
        // checked so the bound and the kernel can never drift apart.
        let next = prev.checked_add(curr).ok_or_else(|| {
            CalcKitError::overflow(format!("fibonacci({n}) exceeds i64 range"))
        })?;
        prev = curr;
        curr = next;
    }
    debug!(index = n, value = prev, "fibonacci");
    Ok(prev)
}

/// Iterator over the first `count` Fibonacci numbers.
///
/// Yields `fib(0), fib(1), ..., fib(count - 1)`. The iterator ends early if
/// `count` exceeds the representable range, so at most
/// [`MAX_FIB_INDEX`]` + 1` terms are produced.
pub fn fibonacci_sequence(count: usize) -> impl Iterator<Item = i64> {
    (0..count.min(MAX_FIB_INDEX as usize + 1) as i64).map_while(|n| fibonacci(n).ok())
}
