//! pip output markers driving progress labels.
//!
//! pip prints `Collecting <name>` while resolving and `Uninstalling
//! <name-version>:` while removing. These lines are the only progress signal
//! pip's plain output offers, so they drive the bars' labels and counts.

use std::sync::OnceLock;

use regex::Regex;

fn collecting_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Collecting (\S+)").unwrap())
}

fn uninstalling_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Uninstalling (\S+)").unwrap())
}

/// Package name from a `Collecting <name>` line, extras stripped.
pub fn collecting_package(line: &str) -> Option<String> {
    collecting_re()
        .captures(line)
        .map(|caps| clean_name(&caps[1]))
}

/// Package name from an `Uninstalling <name-version>:` line.
pub fn uninstalling_package(line: &str) -> Option<String> {
    uninstalling_re()
        .captures(line)
        .map(|caps| clean_name(&caps[1]))
}

/// Drop an extras suffix (`requests[socks]`) and any trailing colon.
fn clean_name(raw: &str) -> String {
    raw.split('[')
        .next()
        .unwrap_or(raw)
        .trim_end_matches(':')
        .to_string()
}
