use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub autosave_debounce_ms: u64,
    /// Open the split view when the sidebar links a note to its source.
    pub split_on_link: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            autosave_debounce_ms: 1000,
            split_on_link: true,
        }
    }
}

impl WorkspaceConfig {
    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}
