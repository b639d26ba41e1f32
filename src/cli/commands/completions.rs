//! Shell completions generation.
//!
//! The `envdoctor completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn script(&self) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "envdoctor", &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.print(&self.script());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let mut ui = MockUI::new();
        CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.printed().contains("envdoctor"));
        assert!(ui.printed().contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let script = cmd.script();
        assert!(script.contains("envdoctor"));
        assert!(script.contains("generate"));
    }

    #[test]
    fn generates_fish_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Fish });
        assert!(cmd.script().contains("envdoctor"));
    }
}
