//! Check command implementation.
//!
//! The `envdoctor check` command parses and validates a `.env` file and
//! prints the report in the requested format.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::lint::{render, OutputFormat};
use crate::pipeline::analyze_with;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::input::{read_or_report, MISSING_INPUT_EXIT_CODE};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let registry = config.registry()?;

        let Some(input) = read_or_report(&self.project_root, self.args.file.as_deref(), ui)? else {
            return Ok(CommandResult::failure(MISSING_INPUT_EXIT_CODE));
        };

        let Some(analysis) = analyze_with(&input.content, &registry) else {
            ui.message("No content to analyze");
            return Ok(CommandResult::success());
        };

        // CLI flags win over the config file
        let format = self.args.format.unwrap_or(config.settings.default_format);
        let strict = self.args.strict || config.settings.strict;

        if format == OutputFormat::Human {
            ui.show_header(&format!("Checking {}", input.source));
        }
        if ui.output_mode().shows_details() {
            if let Some(doc) = &analysis.document {
                ui.message(&format!(
                    "{} entries, {} comments, {} rules",
                    doc.entries.len(),
                    doc.comments.len(),
                    registry.len()
                ));
            }
        }

        let report = render(format, &input.source, &analysis.results, ui.use_color())?;
        ui.print(&report);

        let results = &analysis.results;
        let should_fail = results.has_errors() || (strict && results.has_warnings());

        if format == OutputFormat::Human {
            if results.is_empty() {
                ui.success("No issues found");
            } else if !should_fail {
                ui.success("No blocking issues");
            } else if strict && !results.has_errors() {
                ui.show_hint("Warnings fail the check in strict mode");
            }
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
