//! Runtime settings resolved from the environment

use crate::error::{Result, UntagError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the directory of the default target.
pub const ROOT_ENV: &str = "UNTAG_ROOT";

/// Environment variable holding log filter directives.
pub const LOG_ENV: &str = "UNTAG_LOG";

/// File stripped when no paths are given.
pub const DEFAULT_TARGET: &str = "text.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the default target.
    pub root: PathBuf,
}

impl Settings {
    pub fn new(root: PathBuf) -> Self {
        Settings { root }
    }

    /// Resolve settings, checking UNTAG_ROOT first and falling back to the
    /// directory of the running executable.
    pub fn from_env() -> Result<Self> {
        if let Some(root) = std::env::var_os(ROOT_ENV) {
            return Self::from_root(PathBuf::from(root));
        }

        let exe = std::env::current_exe()?;
        let root = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            UntagError::Config(format!(
                "Cannot determine the directory of {}",
                exe.display()
            ))
        })?;

        Ok(Settings::new(root))
    }

    fn from_root(root: PathBuf) -> Result<Self> {
        if !root.is_dir() {
            return Err(UntagError::Config(format!(
                "{} is set to '{}' but that is not a directory. \
                Point it at the folder holding {} or unset it.",
                ROOT_ENV,
                root.display(),
                DEFAULT_TARGET
            )));
        }
        Ok(Settings::new(root))
    }

    /// Path of the file stripped when no targets are named.
    pub fn default_target(&self) -> PathBuf {
        self.root.join(DEFAULT_TARGET)
    }
}
