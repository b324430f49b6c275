//! Greeting lines for the demo entry point

use crate::constants::GREETING;

/// The fixed greeting printed when the demo starts
pub fn greeting() -> &'static str {
    GREETING
}

/// Greeting addressed to `name`
pub fn greet(name: &str) -> String {
    format!("Hello from Rust, {name}!")
}
