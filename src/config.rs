//! Local profile configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::Author;

/// Error type for profile loading.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity used as the author of every locally sent message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            role: "Developer".to_string(),
        }
    }
}

impl Profile {
    /// Load a profile from a JSON file. Missing fields fall back to the
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn author(&self) -> Author {
        Author::new(self.name.clone(), self.role.clone())
    }
}
