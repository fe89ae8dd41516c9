//! Persisted session settings: API credential and selected profile/member.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The persisted session fields, threaded explicitly through the menu flows
/// rather than living in process-wide state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub api_key: String,
    pub profile_id: String,
    pub member_uuid: String,
}

impl SessionConfig {
    /// Loads the config, falling back to defaults when the file is missing
    /// or unreadable. Load failures are warnings, never fatal.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read config '{}': {}", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse config '{}': {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Whether a profile and member have been picked for purse lookups.
    pub fn has_member_selected(&self) -> bool {
        !self.profile_id.is_empty() && !self.member_uuid.is_empty()
    }
}
