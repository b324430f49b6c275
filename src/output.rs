//! Output control for quiet mode
//!
//! Provides a global quiet mode flag to suppress non-essential output.
//! Informational lines go to stderr so they never corrupt `--json` output
//! on stdout.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppresses informational output)
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if not in quiet mode
pub fn print_info(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a message only if not in quiet mode
#[macro_export]
macro_rules! info_print {
    ($($arg:tt)*) => {
        $crate::output::print_info(format_args!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_toggle() {
        set_quiet(false);
        assert!(!is_quiet());

        set_quiet(true);
        assert!(is_quiet());

        set_quiet(false);
        assert!(!is_quiet());
    }

    #[test]
    fn test_print_info_respects_quiet_mode() {
        // Both paths must not panic
        set_quiet(false);
        print_info(format_args!("info message"));

        set_quiet(true);
        print_info(format_args!("suppressed info message"));

        set_quiet(false);
    }
}
