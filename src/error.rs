//! Error types.

use std::path::PathBuf;

/// Errors from interactive prompts.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("End of input reached before a line was read")]
    Eof,

    #[error("Prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading a theme file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid theme: {0}")]
    Parse(#[from] toml::de::Error),
}
