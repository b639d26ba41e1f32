//! Non-interactive UI for CI/headless environments.

use std::io::Write;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain text with no styling. Under CI, hints are suppressed
/// since nobody is there to act on them.
pub struct NonInteractiveUI {
    mode: OutputMode,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            is_ci: super::is_ci(),
        }
    }

    /// Create with explicit CI flag (for testing).
    pub fn with_ci(mode: OutputMode, is_ci: bool) -> Self {
        Self { mode, is_ci }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            eprintln!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() && !self.is_ci {
            eprintln!("  → {}", hint);
        }
    }

    fn print(&mut self, content: &str) {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes()).ok();
        stdout.flush().ok();
    }

    fn use_color(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_mode() {
        let ui = NonInteractiveUI::with_ci(OutputMode::Verbose, false);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn never_colored() {
        let ui = NonInteractiveUI::with_ci(OutputMode::Normal, true);
        assert!(!ui.use_color());
    }
}
