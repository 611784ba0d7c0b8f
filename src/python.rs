//! Python runtime detection and first-run provisioning.
//!
//! When no `python` executable is on PATH, a pinned installer is downloaded
//! to the working directory, run unattended, and deleted. Provisioning only
//! happens once, at first use; its failure is a hard error.

use std::path::Path;

use crate::error::{Result, VenvmanError};
use crate::net;
use crate::shell::CommandRunner;
use crate::ui::output;

/// Pinned runtime version for provisioning.
pub const PYTHON_VERSION: &str = "3.10.6";

/// Installer artifact name, as published on python.org.
pub fn installer_filename() -> String {
    format!("python-{PYTHON_VERSION}-amd64.exe")
}

/// Fixed download URL for the pinned installer.
pub fn installer_url() -> String {
    format!(
        "https://www.python.org/ftp/python/{PYTHON_VERSION}/{}",
        installer_filename()
    )
}

/// Installation target directory passed to the installer.
pub fn install_target() -> &'static str {
    if cfg!(windows) {
        r"C:\Python310"
    } else {
        "/usr/local/bin/python3"
    }
}

/// Check whether a Python runtime is on PATH.
///
/// Only a spawn failure with "not found" means absent. A runtime that exists
/// but fails its own version check is reported as an error, not as missing.
pub fn is_installed(runner: &dyn CommandRunner) -> Result<bool> {
    match runner.run(Path::new("python"), &["--version"]) {
        Ok(result) if result.success => Ok(true),
        Ok(result) => Err(VenvmanError::CommandFailed {
            command: "python --version".to_string(),
            code: result.exit_code,
        }),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Download and silently install the pinned Python runtime.
pub fn provision(runner: &dyn CommandRunner) -> Result<()> {
    let installer = installer_filename();
    output::info(&format!("Downloading {installer}..."));
    net::download(&installer_url(), Path::new(&installer))?;
    output::info("Python installer downloaded.");

    output::info("Installing Python...");
    let target = format!("TargetDir={}", install_target());
    let result = runner.run(
        Path::new(&installer),
        &["/quiet", "InstallAllUsers=1", "PrependPath=1", &target],
    )?;

    // The artifact is transient either way.
    std::fs::remove_file(&installer)?;

    if !result.success {
        return Err(VenvmanError::PythonInstall {
            code: result.exit_code,
        });
    }

    output::info("Python installed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{CommandResult, MockRunner};

    struct NotFoundRunner;

    impl CommandRunner for NotFoundRunner {
        fn run(&self, _: &Path, _: &[&str]) -> Result<CommandResult> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no python").into())
        }

        fn run_streaming(
            &self,
            program: &Path,
            args: &[&str],
            _: &mut dyn FnMut(&str),
        ) -> Result<CommandResult> {
            self.run(program, args)
        }
    }

    #[test]
    fn installer_url_embeds_pinned_version() {
        let url = installer_url();
        assert_eq!(
            url,
            "https://www.python.org/ftp/python/3.10.6/python-3.10.6-amd64.exe"
        );
    }

    #[test]
    fn detects_installed_runtime() {
        let runner = MockRunner::new().respond(&["--version"], 0, "Python 3.10.6\n");
        assert!(is_installed(&runner).unwrap());
    }

    #[test]
    fn missing_runtime_is_absent_not_an_error() {
        assert!(!is_installed(&NotFoundRunner).unwrap());
    }

    #[test]
    fn broken_runtime_is_an_error() {
        let runner = MockRunner::new().respond(&["--version"], 9, "");
        let err = is_installed(&runner).unwrap_err();
        assert!(matches!(err, VenvmanError::CommandFailed { .. }));
    }
}
