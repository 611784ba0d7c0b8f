//! Package-operation progress bars.
//!
//! Progress here is approximate by contract: bars advance on lines observed
//! in a subprocess's streamed output, never on authoritative completion
//! events. The label tracks the most recent package name scraped from that
//! output.

use std::time::{Duration, Instant};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// A live progress display for one package operation.
pub struct TaskProgress {
    bar: ProgressBar,
    start: Instant,
}

impl TaskProgress {
    /// Unbounded counter: spinner plus a count of observed marker lines.
    ///
    /// Used when the total amount of work is unknowable up front (a single
    /// install whose dependency set pip decides as it goes).
    pub fn counter(label: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars(TICK_CHARS)
                .template("{spinner:.magenta} {msg} [{pos} pkg]")
                .unwrap(),
        );
        bar.set_message(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            start: Instant::now(),
        }
    }

    /// Bounded bar with a known total (one unit per package).
    pub fn sized(label: &str, total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:25.magenta} {pos}/{len} {msg}")
                .unwrap(),
        );
        bar.set_message(label.to_string());

        Self {
            bar,
            start: Instant::now(),
        }
    }

    /// Update the label shown next to the bar.
    pub fn set_label(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Advance the bar.
    pub fn inc(&self, n: u64) {
        self.bar.inc(n);
    }

    /// Current position, for tests.
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar with a success line including elapsed time.
    pub fn finish_success(self, msg: &str) {
        let line = format!(
            "{} {} ({})",
            style("✔").green(),
            msg,
            format_duration(self.start.elapsed())
        );
        self.finish_with(line);
    }

    /// Finish the bar with a failure line.
    pub fn finish_error(self, msg: &str) {
        let line = format!("{} {}", style("✘").red(), msg);
        self.finish_with(line);
    }

    fn finish_with(self, line: String) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(line);
    }
}

/// Format a duration for display.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        let progress = TaskProgress::counter("Installing requests");
        assert_eq!(progress.position(), 0);
        progress.finish_success("done");
    }

    #[test]
    fn counter_advances_on_inc() {
        let progress = TaskProgress::counter("Installing requests");
        progress.inc(1);
        progress.inc(1);
        assert_eq!(progress.position(), 2);
        progress.finish_success("done");
    }

    #[test]
    fn sized_bar_tracks_position() {
        let progress = TaskProgress::sized("Removing packages", 3);
        progress.inc(1);
        assert_eq!(progress.position(), 1);
        progress.finish_error("failed");
    }

    #[test]
    fn label_updates_do_not_panic() {
        let progress = TaskProgress::counter("Installing");
        progress.set_label("Installing: urllib3");
        progress.finish_success("done");
    }

    #[test]
    fn format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs_f64(5.3)), "5.3s");
    }

    #[test]
    fn format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }
}
