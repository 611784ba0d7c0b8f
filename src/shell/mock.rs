//! Mock command runner for tests.
//!
//! Records every invocation and serves canned responses, so package
//! operations can be exercised without launching real subprocesses.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::command::{CommandResult, CommandRunner};
use crate::error::Result;

/// A single recorded subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl RecordedCall {
    /// Whether every token appears among this call's arguments.
    pub fn has_args(&self, tokens: &[&str]) -> bool {
        tokens.iter().all(|t| self.args.iter().any(|a| a == t))
    }
}

struct CannedResponse {
    matcher: Vec<String>,
    exit_code: i32,
    stdout: String,
}

/// Test double for [`CommandRunner`].
///
/// Responses are matched by argument tokens: the first canned response whose
/// tokens all appear in the invocation's arguments wins. Unmatched
/// invocations succeed with empty output.
#[derive(Default)]
pub struct MockRunner {
    responses: Vec<CannedResponse>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response for invocations containing all `matcher` tokens.
    pub fn respond(mut self, matcher: &[&str], exit_code: i32, stdout: &str) -> Self {
        self.responses.push(CannedResponse {
            matcher: matcher.iter().map(|s| s.to_string()).collect(),
            exit_code,
            stdout: stdout.to_string(),
        });
        self
    }

    /// All invocations recorded so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Total number of invocations.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Number of invocations whose arguments contain all given tokens.
    pub fn calls_matching(&self, tokens: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.has_args(tokens))
            .count()
    }

    fn record(&self, program: &Path, args: &[&str]) {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_path_buf(),
            args: args.iter().map(|s| s.to_string()).collect(),
        });
    }

    fn lookup(&self, args: &[&str]) -> (i32, String) {
        for response in &self.responses {
            if response
                .matcher
                .iter()
                .all(|t| args.iter().any(|a| a == t))
            {
                return (response.exit_code, response.stdout.clone());
            }
        }
        (0, String::new())
    }

    fn build_result(&self, args: &[&str]) -> CommandResult {
        let (exit_code, stdout) = self.lookup(args);
        if exit_code == 0 {
            CommandResult::success(stdout, String::new(), Duration::ZERO)
        } else {
            CommandResult::failure(Some(exit_code), stdout, String::new(), Duration::ZERO)
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CommandResult> {
        self.record(program, args);
        Ok(self.build_result(args))
    }

    fn run_streaming(
        &self,
        program: &Path,
        args: &[&str],
        on_line: &mut dyn FnMut(&str),
    ) -> Result<CommandResult> {
        self.record(program, args);
        let result = self.build_result(args);
        for line in result.stdout.lines() {
            on_line(line);
        }
        Ok(result)
    }
}
