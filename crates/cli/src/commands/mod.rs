//! CLI command implementations.
//!
//! Commands return data; `main` decides how to print it. Results go to
//! stdout, logs go to stderr.

pub mod catalog;
pub mod money;
pub mod routes;
pub mod validate;

use serde::Serialize;

/// Print a value as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a single line on stdout.
#[allow(clippy::print_stdout)]
pub fn print_line(line: &str) {
    println!("{line}");
}
