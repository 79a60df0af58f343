//! In-memory battle logs

use std::path::Path;

use anyhow::{Context, Result};

/// One battle log, already loaded into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayLog {
    /// Caller-chosen identifier, usually the replay id or file name
    pub id: String,
    pub text: String,
}

impl ReplayLog {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Load a downloaded `.log` file. The id is the file stem.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay log {}", path.display()))?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { id, text })
    }
}
