use serde::{Deserialize, Serialize};

use crate::constants;

/// Resolution engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum absolute offset in days accepted by deadline arithmetic.
    /// Offsets beyond this are rejected so the stepping loop terminates.
    pub max_offset_days: i64,
    /// Days after "today" within which a due date is classified High.
    pub due_soon_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_offset_days: constants::DEFAULT_MAX_OFFSET_DAYS,
            due_soon_window_days: constants::DEFAULT_DUE_SOON_WINDOW_DAYS,
        }
    }
}
