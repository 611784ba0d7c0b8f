//! User-facing log lines.
//!
//! Informational lines carry the `[INFO]` prefix on stdout; warnings and
//! errors are styled via `console`, which honors `NO_COLOR`.

use console::style;

/// Print an informational line.
pub fn info(msg: &str) {
    println!("[INFO] {msg}");
}

/// Print a styled warning to stdout.
pub fn warn(msg: &str) {
    println!("{} {msg}", style("warning:").yellow().bold());
}

/// Print a styled error to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {msg}", style("error:").red().bold());
}

/// Print a styled success line.
pub fn success(msg: &str) {
    println!("{} {msg}", style("✔").green());
}
