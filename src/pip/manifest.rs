//! Requirements-file parsing.
//!
//! A manifest is plain text, one requirement per line. Blank lines and `#`
//! comments are ignored; a trailing version constraint (`>=1.2`, `==1.0`,
//! `!=2.0`, `~=1.4`) is stripped down to the bare package name. Extras,
//! environment markers, and structured versions are out of scope — the
//! constraint text is only ever re-read by pip itself.

use std::fs;
use std::path::Path;

use crate::error::{Result, VenvmanError};

const COMMENT_MARKER: char = '#';

/// Characters that begin a version-comparison operator.
const VERSION_OPERATORS: &[char] = &['=', '<', '>', '!', '~'];

/// Extract the package name from one requirement line.
///
/// Returns `None` for blank lines and comments.
pub fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }

    let name = line.split(VERSION_OPERATORS).next().unwrap_or(line).trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Read all package names from a manifest file.
pub fn read_packages(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(VenvmanError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().filter_map(parse_line).collect())
}
