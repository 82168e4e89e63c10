//! Console output outside the interactive screen.
//!
//! Used before the terminal is taken over or after it has been restored.

use colored::*;

/// Formats and prints an error message to stderr
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Error line with the red prefix and surrounding blank lines
pub fn format_error(message: &str) -> String {
    format!("\n{} {}\n", "✕ Error:".red(), message.white())
}
