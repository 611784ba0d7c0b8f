//! Interactive prompts.

use dialoguer::{Confirm, Input};

use crate::error::{Result, VenvmanError};

/// Convert dialoguer errors into our error type.
fn map_dialoguer_err(e: dialoguer::Error) -> VenvmanError {
    VenvmanError::Prompt(e.to_string())
}

/// Free-form text input; empty input is allowed and returned trimmed.
pub fn input(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(map_dialoguer_err)
}

/// Text input that falls back to `default` when the user just presses enter.
pub fn input_with_default(prompt: &str, default: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(map_dialoguer_err)
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(map_dialoguer_err)
}
