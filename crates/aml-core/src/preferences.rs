//! User preference store.
//!
//! Only `FileCustomization.Overwrite` is consulted. Preferences are read from
//! TOML:
//!
//! ```toml
//! [FileCustomization]
//! Overwrite = "Error"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AmlError, Result};

/// Environment variable naming a preference file.
pub const PREFERENCES_ENV: &str = "AML_PREFERENCES";

/// Source of user preferences consulted during verification.
pub trait PreferenceStore: fmt::Debug {
    /// Raw `FileCustomization.Overwrite` value.
    fn overwrite(&self) -> &str;
}

/// What to do when an output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    Allow,
    Error,
}

impl OverwritePolicy {
    /// Interpret a preference value; `None` when it is neither spelling.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("allow") {
            Some(Self::Allow)
        } else if value.eq_ignore_ascii_case("error") {
            Some(Self::Error)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCustomization {
    #[serde(rename = "Overwrite", default = "default_overwrite")]
    pub overwrite: String,
}

fn default_overwrite() -> String {
    "Allow".to_string()
}

impl Default for FileCustomization {
    fn default() -> Self {
        Self {
            overwrite: default_overwrite(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "FileCustomization", default)]
    pub file_customization: FileCustomization,
}

impl Preferences {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|err| AmlError::Preferences {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| AmlError::Preferences {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Explicit path first, then [`PREFERENCES_ENV`], then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(PREFERENCES_ENV).map(PathBuf::from));
        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading user preferences");
                Self::from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Preferences with a fixed overwrite value.
    pub fn with_overwrite(value: impl Into<String>) -> Self {
        Self {
            file_customization: FileCustomization {
                overwrite: value.into(),
            },
        }
    }
}

impl PreferenceStore for Preferences {
    fn overwrite(&self) -> &str {
        &self.file_customization.overwrite
    }
}
