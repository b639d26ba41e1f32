//! Config command implementation.
//!
//! The `envdoctor config` command shows the resolved configuration as
//! YAML, or the JSON Schema for `.envdoctor.yml`.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigPaths, EnvDoctorConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = serde_json::to_string_pretty(&EnvDoctorConfig::json_schema())
                .map_err(anyhow::Error::from)?;
            ui.print(&format!("{}\n", schema));
            return Ok(CommandResult::success());
        }

        let source = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => ConfigPaths::discover(&self.project_root).project,
        };
        match &source {
            Some(path) => ui.message(&format!("Loaded from {}", path.display())),
            None => ui.message("No config file found, showing defaults"),
        }

        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let yaml = serde_yaml::to_string(&config).map_err(anyhow::Error::from)?;
        ui.print(&yaml);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvDoctorError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ConfigCommand::new(temp.path(), None, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("showing defaults"));
        let parsed: EnvDoctorConfig = serde_yaml::from_str(ui.printed()).unwrap();
        assert_eq!(parsed, EnvDoctorConfig::default());
    }

    #[test]
    fn shows_resolved_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".envdoctor.yml"),
            "settings:\n  strict: true\n",
        )
        .unwrap();
        let mut ui = MockUI::new();

        ConfigCommand::new(temp.path(), None, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message(".envdoctor.yml"));
        assert!(ui.printed().contains("strict: true"));
        assert!(ui.printed().contains("default_format: human"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".envdoctor.yml"), "bogus: 1\n").unwrap();
        let mut ui = MockUI::new();

        let err = ConfigCommand::new(temp.path(), None, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, EnvDoctorError::ConfigParseError { .. }));
    }

    #[test]
    fn prints_schema() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ConfigCommand::new(temp.path(), None, ConfigArgs { schema: true })
            .execute(&mut ui)
            .unwrap();

        let schema: serde_json::Value = serde_json::from_str(ui.printed()).unwrap();
        assert!(schema["properties"]["generate"].is_object());
    }
}
