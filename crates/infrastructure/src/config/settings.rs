//! Settings file configuration.

use serde::{Deserialize, Serialize};

/// Location of the persisted settings file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Path to the JSON settings file. The parent directory must be
    /// writable: atomic writes stage a temp file next to the target.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "wind_lantern_settings.json".to_string()
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
