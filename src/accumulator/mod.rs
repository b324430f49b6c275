//! Running-total accumulator
//!
//! A stateful holder of a signed 64-bit total, created with an initial value
//! and mutated by repeated addition. `add` returns `&mut self` so calls can
//! be chained; addition is checked, and a failed addition leaves the value
//! unchanged.

use crate::error::{CalcKitError, Result};
use tracing::{debug, warn};

/// Accumulator over a signed 64-bit running total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator {
    value: i64,
}

impl Accumulator {
    /// Create an accumulator starting at `initial`
    pub fn new(initial: i64) -> Self {
        Self { value: initial }
    }

    /// Add `n` to the running total, returning `&mut self` for chaining.
    ///
    /// Overflow policy: checked. On overflow the total is left unchanged and
    /// an [`CalcKitError::Overflow`] is returned.
    pub fn add(&mut self, n: i64) -> Result<&mut Self> {
        let next = self.value.checked_add(n).ok_or_else(|| {
            warn!(value = self.value, increment = n, "addition rejected, overflows i64");
            CalcKitError::overflow(format!("{} + {} exceeds i64 range", self.value, n))
        })?;
        debug!(from = self.value, increment = n, to = next, "accumulate");
        self.value = next;
        Ok(self)
    }

    /// Fold a sequence of increments into the total.
    ///
    /// Equivalent to calling [`add`](Self::add) once per increment; stops at
    /// the first overflow, leaving increments applied so far in place.
    pub fn apply<I>(&mut self, increments: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = i64>,
    {
        for n in increments {
            self.add(n)?;
        }
        Ok(self)
    }

    /// Current total. No side effects.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Accumulator {
    /// An accumulator starting at zero
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_initial_value() {
        let acc = Accumulator::new(10);
        assert_eq!(acc.value(), 10);

        let acc = Accumulator::new(-3);
        assert_eq!(acc.value(), -3);
    }

    #[test]
    fn test_demo_scenario() {
        // The literal scenario reproduced by the demo command
        let mut acc = Accumulator::new(10);
        acc.add(5).unwrap();
        assert_eq!(acc.value(), 15);
    }

    #[test]
    fn test_add_chains() {
        let mut acc = Accumulator::new(1);
        acc.add(2).unwrap().add(3).unwrap().add(4).unwrap();
        assert_eq!(acc.value(), 10);
    }

    #[test]
    fn test_apply_equals_sum() {
        let increments = [7, -2, 100, 0, 13];
        let mut acc = Accumulator::new(42);
        acc.apply(increments).unwrap();
        assert_eq!(acc.value(), 42 + increments.iter().sum::<i64>());
    }

    #[test]
    fn test_value_is_idempotent() {
        let acc = Accumulator::new(15);
        assert_eq!(acc.value(), acc.value());
    }

    #[test]
    fn test_overflow_is_an_error_and_leaves_value_unchanged() {
        let mut acc = Accumulator::new(i64::MAX);
        let err = acc.add(1).unwrap_err();
        assert!(err.to_string().contains("Arithmetic overflow"));
        assert_eq!(acc.value(), i64::MAX);

        let mut acc = Accumulator::new(i64::MIN);
        assert!(acc.add(-1).is_err());
        assert_eq!(acc.value(), i64::MIN);
    }

    #[test]
    fn test_apply_stops_at_first_overflow() {
        let mut acc = Accumulator::new(0);
        let result = acc.apply([5, i64::MAX, 1]);
        assert!(result.is_err());
        // The increment before the overflowing one stays applied
        assert_eq!(acc.value(), 5);
    }

    #[test]
    fn test_default_starts_at_zero() {
        assert_eq!(Accumulator::default().value(), 0);
    }
}
