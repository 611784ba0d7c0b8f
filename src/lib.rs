//! venvman - Interactive Python virtual environment and package helper.
//!
//! venvman shells out to `python`, `venv`, and `pip`: it checks network
//! reachability, provisions a Python runtime when none is on PATH, creates a
//! named virtual environment, and offers a numbered menu to install, remove,
//! list, update, and freeze packages, scraping pip's streamed output to drive
//! progress bars.
//!
//! # Modules
//!
//! - [`cli`] - Command-line flags
//! - [`error`] - Error types and result aliases
//! - [`menu`] - Interactive menu loop
//! - [`net`] - Connectivity probe and installer download
//! - [`pip`] - Package operations (install, remove, update, list, freeze)
//! - [`python`] - Runtime detection and provisioning
//! - [`shell`] - Subprocess execution seam
//! - [`ui`] - Output lines, prompts, and progress bars
//! - [`venv`] - Virtual environment resolution and creation
//!
//! # Example
//!
//! ```
//! use venvman::pip::manifest::parse_line;
//!
//! // Requirement lines reduce to bare package names.
//! assert_eq!(parse_line("requests>=2.31"), Some("requests".to_string()));
//! assert_eq!(parse_line("# comment"), None);
//! ```

pub mod cli;
pub mod error;
pub mod menu;
pub mod net;
pub mod pip;
pub mod python;
pub mod shell;
pub mod ui;
pub mod venv;

pub use error::{Result, VenvmanError};
