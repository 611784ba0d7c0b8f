//! Blocking subprocess execution.
//!
//! Every external tool venvman touches (python, pip, the platform installer)
//! goes through the [`CommandRunner`] trait so that operations can be tested
//! against a fake runner instead of real subprocesses. Exactly one subprocess
//! runs at a time; the caller blocks until it exits.

use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Result of executing a subprocess.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Synchronous command execution seam.
///
/// Both methods block until the subprocess exits and never raise on a
/// non-zero exit code; that is reported through [`CommandResult`]. An `Err`
/// means the process could not be spawned or its streams could not be read —
/// callers use [`crate::error::VenvmanError::is_not_found`] to distinguish
/// a missing executable from other spawn failures.
pub trait CommandRunner {
    /// Run to completion, capturing both output streams.
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandResult>;

    /// Run to completion, delivering stdout line-by-line to `on_line` on the
    /// calling thread. Progress driven from these lines is approximate by
    /// contract: it counts lines observed, not work completed. Stderr is
    /// drained and captured but not streamed.
    fn run_streaming(
        &self,
        program: &Path,
        args: &[&str],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Human-readable exit status for log lines.
pub fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// Render a command line for logs and error messages.
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let mut s = program.display().to_string();
    for arg in args {
        s.push(' ');
        s.push_str(arg);
    }
    s
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("running: {}", display_command(program, args));

        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let duration = start.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr, duration))
        } else {
            Ok(CommandResult::failure(
                output.status.code(),
                stdout,
                stderr,
                duration,
            ))
        }
    }

    fn run_streaming(
        &self,
        program: &Path,
        args: &[&str],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("streaming: {}", display_command(program, args));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Callbacks are not Send, so stdout is read here on the calling
        // thread; a helper thread drains stderr to avoid pipe deadlock.
        let stderr = child.stderr.take();
        let stderr_handle = thread::spawn(move || {
            let mut collected = String::new();
            if let Some(stream) = stderr {
                let reader = BufReader::new(stream);
                for line in reader.lines().map_while(std::result::Result::ok) {
                    collected.push_str(&line);
                    collected.push('\n');
                }
            }
            collected
        });

        let mut stdout_output = String::new();
        if let Some(stream) = child.stdout.take() {
            let reader = BufReader::new(stream);
            for line in reader.lines().map_while(std::result::Result::ok) {
                stdout_output.push_str(&line);
                stdout_output.push('\n');
                on_line(&line);
            }
        }

        let stderr_output = stderr_handle.join().unwrap_or_default();
        let status = child.wait()?;
        let duration = start.elapsed();

        if status.success() {
            Ok(CommandResult::success(
                stdout_output,
                stderr_output,
                duration,
            ))
        } else {
            Ok(CommandResult::failure(
                status.code(),
                stdout_output,
                stderr_output,
                duration,
            ))
        }
    }
}
