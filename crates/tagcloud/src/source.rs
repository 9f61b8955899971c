//! Loading the input document.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::CloudError;

/// Label used when the text comes from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// A fully loaded input text.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display label (the path as given, or [`STDIN_LABEL`]).
    pub label: String,
    /// Full UTF-8 content.
    pub text: String,
}

impl Document {
    /// Wrap already-loaded text.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// The text split into lines (`\n` or `\r\n` terminated).
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

/// Read the file at `path`.
///
/// Missing files, permission errors and non-UTF-8 content all map to
/// [`CloudError::InputUnavailable`].
pub fn read_path(path: &Path) -> Result<Document, CloudError> {
    let text = std::fs::read_to_string(path).map_err(|source| CloudError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::new(path.display().to_string(), text))
}

/// Read all of standard input.
pub fn read_stdin() -> Result<Document, CloudError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| CloudError::InputUnavailable {
            path: PathBuf::from("-"),
            source,
        })?;
    Ok(Document::new(STDIN_LABEL, text))
}
