//! Parsing pip's tabular and freeze output.
//!
//! `pip list` prints a two-line column header (`Package Version` plus a
//! separator) before the data rows. The parser contract is deliberately
//! explicit and narrow: skip exactly [`HEADER_LINES`] leading lines, then
//! take the first whitespace-delimited token of every non-blank line. If
//! pip's header format ever changes, this module is the only place that
//! assumption lives.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::venv::Venv;

/// Number of fixed header lines at the top of `pip list` output.
pub const HEADER_LINES: usize = 2;

/// First token of each data row in two-line-header tabular output.
pub fn parse_table(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(HEADER_LINES)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| name.to_string())
        .collect()
}

/// Names from `pip freeze` output: everything before the first `==`.
pub fn parse_freeze(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split("==").next().unwrap_or(line).trim().to_string())
        .collect()
}

/// Lower-cased set of installed package names, recomputed on every call.
pub fn installed_set(runner: &dyn CommandRunner, venv: &Venv) -> Result<BTreeSet<String>> {
    let result = runner.run(&venv.python_path(), &["-m", "pip", "list"])?;
    Ok(parse_table(&result.stdout)
        .into_iter()
        .map(|name| name.to_lowercase())
        .collect())
}

/// Outdated package names in pip's reported order.
pub fn outdated(runner: &dyn CommandRunner, venv: &Venv) -> Result<Vec<String>> {
    let result = runner.run(&venv.python_path(), &["-m", "pip", "list", "--outdated"])?;
    Ok(parse_table(&result.stdout))
}

/// Installed packages as reported by `pip freeze`.
pub fn frozen(runner: &dyn CommandRunner, venv: &Venv) -> Result<Vec<String>> {
    let result = runner.run(&venv.python_path(), &["-m", "pip", "freeze"])?;
    Ok(parse_freeze(&result.stdout))
}

/// Echo `pip list` output for the user (menu option 5).
pub fn print_installed(runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    let result = runner.run(&venv.python_path(), &["-m", "pip", "list"])?;
    print!("{}", result.stdout);
    Ok(())
}
