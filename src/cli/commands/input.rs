//! Reading the `.env` text a command works on.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{EnvDoctorError, Result};
use crate::ui::UserInterface;

/// File analyzed when no path is given.
pub const DEFAULT_INPUT: &str = ".env";

/// Path that means "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Input text together with the name reports should use for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvInput {
    /// `stdin`, or the path as the user wrote it.
    pub source: String,
    pub content: String,
}

/// Read the input for a command.
///
/// Relative paths resolve against `project_root`. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns `InputNotFound` when the file does not exist.
pub fn read_input(project_root: &Path, file: Option<&Path>) -> Result<EnvInput> {
    let file = file.unwrap_or_else(|| Path::new(DEFAULT_INPUT));

    if file == Path::new(STDIN_MARKER) {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        tracing::debug!(bytes = bytes.len(), "read input from stdin");
        return Ok(EnvInput {
            source: "stdin".to_string(),
            content: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    let path = project_root.join(file);
    let bytes = fs::read(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EnvDoctorError::InputNotFound { path: path.clone() },
        _ => EnvDoctorError::Io(e),
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");

    Ok(EnvInput {
        source: file.display().to_string(),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Exit code for a missing input file.
pub const MISSING_INPUT_EXIT_CODE: i32 = 2;

/// Read the input, reporting a missing file through the UI.
///
/// Returns `None` once the miss has been reported; the command should then
/// exit with [`MISSING_INPUT_EXIT_CODE`].
pub(crate) fn read_or_report(
    project_root: &Path,
    file: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<EnvInput>> {
    match read_input(project_root, file) {
        Ok(input) => Ok(Some(input)),
        Err(EnvDoctorError::InputNotFound { path }) => {
            ui.error(&format!("File not found: {}", display_path(&path)));
            ui.show_hint("Pass a path, or `-` to read stdin");
            ui.show_hint("No .env yet? Try `envdoctor sample problematic | envdoctor check -`");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn display_path(path: &Path) -> String {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    path.strip_prefix(&cwd)
        .unwrap_or(path)
        .display()
        .to_string()
}
