//! Package operations against a virtual environment's pip.
//!
//! Every operation is a thin wrapper around `<venv python> -m pip …` through
//! the [`crate::shell::CommandRunner`] seam, with light parsing of pip's
//! textual output.

pub mod export;
pub mod install;
pub mod listing;
pub mod manifest;
pub mod markers;
pub mod remove;
pub mod update;
