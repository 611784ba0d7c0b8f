//! Interactive menu loop.
//!
//! One state ("awaiting choice"), eight transitions. Options 1–7 run an
//! operation and re-enter the same state; option 8 exits. Recoverable
//! operation errors are logged and the loop continues.

use std::path::Path;
use std::str::FromStr;

use crate::error::Result;
use crate::pip::{export, install, listing, remove, update};
use crate::shell::CommandRunner;
use crate::ui::{output, prompts};
use crate::venv::Venv;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Install,
    Remove,
    RemoveAll,
    InstallManifest,
    List,
    Export,
    CheckUpdates,
    Exit,
}

/// Unrecognized menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Install),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::RemoveAll),
            "4" => Ok(Self::InstallManifest),
            "5" => Ok(Self::List),
            "6" => Ok(Self::Export),
            "7" => Ok(Self::CheckUpdates),
            "8" => Ok(Self::Exit),
            other => Err(InvalidChoice(other.to_string())),
        }
    }
}

fn print_menu() {
    println!();
    println!("Choose an option:");
    println!("[1] Install a package");
    println!("[2] Remove a package");
    println!("[3] Remove all packages");
    println!("[4] Install from requirements.txt");
    println!("[5] List installed packages");
    println!("[6] Generate requirements.txt");
    println!("[7] Check for updates");
    println!("[8] Exit");
}

/// Run the menu loop until the user chooses to exit.
pub fn run_loop(runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    loop {
        print_menu();
        let raw = prompts::input("Enter your choice (1-8)")?;
        let choice = match raw.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(_) => {
                output::info("Invalid choice. Please enter a number between 1 and 8.");
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            output::info("Exiting... Goodbye!");
            return Ok(());
        }

        if let Err(e) = dispatch(choice, runner, venv) {
            // Recoverable by design: report and re-enter the loop.
            output::error(&e.to_string());
        }
    }
}

fn dispatch(choice: MenuChoice, runner: &dyn CommandRunner, venv: &Venv) -> Result<()> {
    match choice {
        MenuChoice::Install => {
            let package = prompts::input("Enter package name to install")?;
            if !package.is_empty() {
                install::install_package(runner, venv, &package)?;
            }
        }
        MenuChoice::Remove => {
            let package = prompts::input("Enter package name to remove")?;
            if !package.is_empty() {
                remove::remove_package(runner, venv, &package)?;
            }
        }
        MenuChoice::RemoveAll => {
            if prompts::confirm("Are you sure you want to remove all packages?")? {
                remove::remove_all(runner, venv)?;
            }
        }
        MenuChoice::InstallManifest => {
            let path = prompts::input("Enter the path to requirements.txt")?;
            if !path.is_empty() {
                install::install_from_manifest(runner, venv, Path::new(&path))?;
            }
        }
        MenuChoice::List => listing::print_installed(runner, venv)?,
        MenuChoice::Export => export::export_manifest(runner, venv)?,
        MenuChoice::CheckUpdates => update::check_for_updates(runner, venv)?,
        MenuChoice::Exit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_choices_parse() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::Install);
        assert_eq!("4".parse::<MenuChoice>().unwrap(), MenuChoice::InstallManifest);
        assert_eq!("8".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(" 5 ".parse::<MenuChoice>().unwrap(), MenuChoice::List);
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        assert!("9".parse::<MenuChoice>().is_err());
        assert!("0".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!("x".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        assert!("install".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn invalid_choice_carries_the_raw_input() {
        let err = "abc".parse::<MenuChoice>().unwrap_err();
        assert_eq!(err, InvalidChoice("abc".to_string()));
    }
}
