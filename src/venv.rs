//! Virtual environment resolution and creation.

use std::path::{Path, PathBuf};

use crate::error::{Result, VenvmanError};
use crate::shell::{command::display_command, CommandRunner};
use crate::ui::output;

/// A virtual environment keyed by its user-supplied name.
///
/// The name doubles as the environment's directory path. An existing
/// directory is taken at face value; nothing validates that it actually holds
/// a working environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venv {
    name: String,
}

impl Venv {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Platform-specific path to this environment's Python executable.
    ///
    /// Pure path arithmetic; the executable may not exist yet.
    pub fn python_path(&self) -> PathBuf {
        let mut path = PathBuf::from(&self.name);
        if cfg!(windows) {
            path.push("Scripts");
            path.push("python.exe");
        } else {
            path.push("bin");
            path.push("python");
        }
        path
    }

    /// Whether the environment directory already exists on disk.
    pub fn exists(&self) -> bool {
        Path::new(&self.name).exists()
    }

    /// Create the environment unless its directory already exists.
    ///
    /// Existing directories are skipped without any subprocess call.
    pub fn ensure(&self, runner: &dyn CommandRunner) -> Result<()> {
        if self.exists() {
            return Ok(());
        }

        output::info(&format!("Creating virtual environment: {}...", self.name));
        let args = ["-m", "venv", self.name.as_str()];
        let result = runner.run(Path::new("python"), &args)?;
        if !result.success {
            return Err(VenvmanError::CommandFailed {
                command: display_command(Path::new("python"), &args),
                code: result.exit_code,
            });
        }

        output::info(&format!(
            "Virtual environment '{}' created successfully.",
            self.name
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    #[cfg(not(windows))]
    fn python_path_uses_posix_layout() {
        let venv = Venv::new("myenv");
        assert_eq!(venv.python_path(), PathBuf::from("myenv/bin/python"));
    }

    #[test]
    #[cfg(windows)]
    fn python_path_uses_windows_layout() {
        let venv = Venv::new("myenv");
        assert_eq!(
            venv.python_path(),
            PathBuf::from(r"myenv\Scripts\python.exe")
        );
    }

    #[test]
    fn ensure_creates_missing_environment_once() {
        let temp = tempfile::TempDir::new().unwrap();
        let name = temp.path().join("fresh-env").display().to_string();
        let venv = Venv::new(&name);
        let runner = MockRunner::new();

        venv.ensure(&runner).unwrap();

        assert_eq!(runner.calls_matching(&["-m", "venv"]), 1);
        assert!(runner.calls()[0].has_args(&[name.as_str()]));
    }

    #[test]
    fn ensure_skips_existing_directory_without_subprocess() {
        let temp = tempfile::TempDir::new().unwrap();
        let venv = Venv::new(temp.path().display().to_string());
        let runner = MockRunner::new();

        venv.ensure(&runner).unwrap();

        assert_eq!(runner.call_count(), 0);
    }

    #[test]
    fn ensure_surfaces_creation_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let name = temp.path().join("bad-env").display().to_string();
        let venv = Venv::new(name);
        let runner = MockRunner::new().respond(&["-m", "venv"], 1, "");

        let err = venv.ensure(&runner).unwrap_err();
        assert!(matches!(err, VenvmanError::CommandFailed { .. }));
    }
}
