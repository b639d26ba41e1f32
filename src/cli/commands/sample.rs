//! Sample command implementation.
//!
//! The `envdoctor sample` command lists the bundled sample files, or prints
//! one so it can be piped into another command:
//!
//! ```text
//! envdoctor sample problematic | envdoctor check -
//! ```

use crate::cli::args::SampleArgs;
use crate::error::Result;
use crate::samples::{self, SAMPLES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sample command implementation.
pub struct SampleCommand {
    args: SampleArgs,
}

impl SampleCommand {
    /// Create a new sample command.
    pub fn new(args: SampleArgs) -> Self {
        Self { args }
    }
}

impl Command for SampleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(name) = &self.args.name else {
            let width = SAMPLES.iter().map(|s| s.name.len()).max().unwrap_or(0);
            let listing: String = SAMPLES
                .iter()
                .map(|s| format!("{:width$}  {} - {}\n", s.name, s.title, s.description))
                .collect();
            ui.print(&listing);
            ui.show_hint("Print one with `envdoctor sample <NAME>`");
            return Ok(CommandResult::success());
        };

        match samples::find(name) {
            Some(sample) => {
                ui.print(sample.content);
                Ok(CommandResult::success())
            }
            None => {
                ui.error(&format!("Unknown sample: {}", name));
                ui.show_hint(&format!("Available samples: {}", samples::names()));
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_samples() {
        let mut ui = MockUI::new();
        SampleCommand::new(SampleArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.printed().lines().count(), SAMPLES.len());
        assert!(ui.printed().contains("problematic"));
        assert!(ui.printed().contains("Next.js App"));
    }

    #[test]
    fn prints_sample_verbatim() {
        let mut ui = MockUI::new();
        let args = SampleArgs {
            name: Some("node-api".to_string()),
        };

        let result = SampleCommand::new(args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.printed(), samples::find("node-api").unwrap().content);
    }

    #[test]
    fn unknown_sample_fails() {
        let mut ui = MockUI::new();
        let args = SampleArgs {
            name: Some("rails".to_string()),
        };

        let result = SampleCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("rails"));
        assert!(ui.has_hint("nextjs, node-api, problematic"));
    }
}
