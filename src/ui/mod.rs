//! Terminal output, prompts, and progress indicators.

pub mod output;
pub mod progress;
pub mod prompts;

pub use progress::{format_duration, TaskProgress};
pub use prompts::{confirm, input, input_with_default};
