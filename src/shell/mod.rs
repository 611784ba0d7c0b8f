//! Subprocess execution.

pub mod command;
pub mod mock;

pub use command::{describe_exit, display_command, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
