//! Parse command implementation.
//!
//! The `envdoctor parse` command prints the structure the parser recovered
//! from a `.env` file as pretty JSON, which is handy when a check result
//! looks surprising.

use std::path::{Path, PathBuf};

use crate::cli::args::ParseArgs;
use crate::error::Result;
use crate::parser::parse;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::input::{read_or_report, MISSING_INPUT_EXIT_CODE};

/// The parse command implementation.
pub struct ParseCommand {
    project_root: PathBuf,
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(project_root: &Path, args: ParseArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(input) = read_or_report(&self.project_root, self.args.file.as_deref(), ui)? else {
            return Ok(CommandResult::failure(MISSING_INPUT_EXIT_CODE));
        };

        let doc = parse(&input.content);
        let json = serde_json::to_string_pretty(&doc).map_err(anyhow::Error::from)?;
        ui.print(&format!("{}\n", json));

        Ok(CommandResult::success())
    }
}
