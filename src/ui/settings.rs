use serde::{Deserialize, Serialize};

/// Persisted UI preferences. The API key is intentionally not part of
/// this struct and never reaches disk.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiSettings {
    pub ui_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { ui_scale: 1.0 }
    }
}
