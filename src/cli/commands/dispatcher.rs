//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for status lines and primary output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config_path.as_deref();

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Generate(args)) => {
                let cmd =
                    super::generate::GenerateCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Parse(args)) => {
                let cmd = super::parse::ParseCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Sample(args)) => {
                let cmd = super::sample::SampleCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Config(args)) => {
                let cmd =
                    super::config::ConfigCommand::new(&self.project_root, config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to checking .env
                let cmd =
                    super::check::CheckCommand::new(&self.project_root, config, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_checks_dot_env() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "PORT=99999\n").unwrap();

        let cli = Cli::parse_from(["envdoctor"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.printed().contains("error[port-range]"));
    }

    #[test]
    fn explicit_config_is_used() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "PORT=99999\n").unwrap();
        let config = temp.path().join("lenient.yml");
        fs::write(&config, "rules:\n  disabled: [port-range]\n").unwrap();

        let cli = Cli::parse_from(["envdoctor", "check"]);
        let mut ui = MockUI::new();
        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .with_config(Some(config))
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
    }
}
