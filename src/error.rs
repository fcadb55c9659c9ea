//! Error types for untag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for untag
#[derive(Debug, Error)]
pub enum UntagError {
    #[error("Target file not found: {0}")]
    TargetNotFound(PathBuf),

    #[error("Target file is not valid UTF-8: {0}")]
    Decode(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    TargetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl UntagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UntagError::TargetNotFound(_) => 2,
            UntagError::Decode(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UntagError::TargetNotFound(path) => {
                format!(
                    "Target file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • Without arguments untag strips text.html next to the executable\n\
                    • Set UNTAG_ROOT to the folder holding text.html",
                    path.display()
                )
            }
            UntagError::Decode(path) => {
                format!(
                    "Target file is not valid UTF-8: {}\n\n\
                    The file was left untouched. Convert it to UTF-8 first, e.g.:\n\
                    iconv -f latin1 -t utf-8 in.html > out.html",
                    path.display()
                )
            }
            UntagError::TargetIo { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the file is readable and writable by you\n\
                    • untag rewrites the file in place and keeps its permissions",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UntagError
pub type Result<T> = std::result::Result<T, UntagError>;
