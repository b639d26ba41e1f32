//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, EnvDoctorTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    status: Term,
    out: Term,
    theme: EnvDoctorTheme,
    colors: bool,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let colors = should_use_colors();
        let theme = if colors {
            EnvDoctorTheme::new()
        } else {
            EnvDoctorTheme::plain()
        };

        Self {
            status: Term::stderr(),
            out: Term::stdout(),
            theme,
            colors,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.status, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.status, "  {}", self.theme.format_hint(hint)).ok();
        }
    }

    fn print(&mut self, content: &str) {
        write!(self.out, "{}", content).ok();
        self.out.flush().ok();
    }

    fn use_color(&self) -> bool {
        self.colors
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
