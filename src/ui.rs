//! Terminal output helpers — version banner and confirmation lines.
//!
//! Everything here writes plain, static text; `console` handles ANSI
//! styling and disables it automatically when stdout is not a terminal.
//! Diagnostics go through the logger, not through this module.

use console::style;

/// Copyright line shown under the version banner.
pub const COPYRIGHT: &str = "Copyright (c) 2015 by Oliver Ratzesberger";

/// First banner line: program name and version.
fn version_line() -> String {
    format!("rainmachine v{}", env!("CARGO_PKG_VERSION"))
}

/// Print the version banner to stdout.
pub fn print_banner() {
    println!("{}", style(version_line()).cyan().bold());
    println!("{COPYRIGHT}");
}

/// Print a ✓-prefixed confirmation line to stdout.
pub fn success(msg: &str) {
    println!("  {}  {}", style("✓").green().bold(), msg);
}

// ─── Tests ────────────────────────────────────────────────────────────────────
