//! Generate command implementation.
//!
//! The `envdoctor generate` command runs the full pipeline and writes the
//! deployment artifacts, or prints them when no output directory is set.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::GenerateArgs;
use crate::config::{load_config, EnvDoctorConfig};
use crate::error::{EnvDoctorError, Result};
use crate::generate::{ArtifactKind, GeneratedOutputs};
use crate::pipeline::{analyze_with, FAILURE_MESSAGE};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::input::{read_or_report, MISSING_INPUT_EXIT_CODE};

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: GenerateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Artifacts to produce: `--only` if given, else the config list.
    fn artifacts(&self, config: &EnvDoctorConfig) -> Vec<ArtifactKind> {
        let requested = if self.args.only.is_empty() {
            &config.generate.artifacts
        } else {
            &self.args.only
        };

        let mut kinds = Vec::with_capacity(requested.len());
        for kind in requested {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Destination directory. A flag is taken as given; the config value
    /// is relative to the project root.
    fn output_dir(&self, config: &EnvDoctorConfig) -> Option<PathBuf> {
        self.args.output_dir.clone().or_else(|| {
            config
                .generate
                .output_dir
                .as_ref()
                .map(|dir| self.project_root.join(dir))
        })
    }

    fn write_artifacts(
        &self,
        dir: &Path,
        outputs: &GeneratedOutputs,
        kinds: &[ArtifactKind],
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| EnvDoctorError::ArtifactWrite {
            path: dir.to_path_buf(),
            source,
        })?;

        for kind in kinds {
            let path = dir.join(kind.file_name());
            fs::write(&path, with_trailing_newline(outputs.get(*kind))).map_err(|source| {
                EnvDoctorError::ArtifactWrite {
                    path: path.clone(),
                    source,
                }
            })?;
            tracing::debug!(artifact = %kind, path = %path.display(), "wrote artifact");
            ui.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

impl Command for GenerateCommand {
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

        let Some(outputs) = &analysis.outputs else {
            ui.error(FAILURE_MESSAGE);
            return Ok(CommandResult::failure(1));
        };

        let errors = analysis.results.errors.len();
        if errors > 0 {
            ui.warning(&format!(
                "{} has {} error(s); artifacts reflect the file as it is",
                input.source, errors
            ));
            ui.show_hint(&format!("Run `envdoctor check {}` for details", input.source));
        }

        let kinds = self.artifacts(&config);
        match self.output_dir(&config) {
            Some(dir) => self.write_artifacts(&dir, outputs, &kinds, ui)?,
            None => {
                for kind in &kinds {
                    ui.show_header(kind.file_name());
                    ui.print(&with_trailing_newline(outputs.get(*kind)));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

fn with_trailing_newline(content: &str) -> String {
    if content.is_empty() || content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}
