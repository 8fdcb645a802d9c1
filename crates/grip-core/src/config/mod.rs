mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
pub use crate::modifier::Modifier;
pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Grip.
///
/// Loaded from `~/.config/grip/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Modifier combinations that start a gesture.
    pub gestures: GestureConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Modifier combinations for each gesture.
///
/// Each combination is matched exactly: holding extra gesture keys
/// (or only some of them) does not start the gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Keys that move the window under the cursor.
    pub drag: Vec<Modifier>,
    /// Keys that resize the window under the cursor.
    pub resize: Vec<Modifier>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        use Modifier::{Alt, Cmd, Ctrl};

        Self {
            drag: vec![Ctrl, Cmd],
            resize: vec![Ctrl, Cmd, Alt],
        }
    }
}

impl GestureConfig {
    /// Returns whether both combinations are usable and distinct.
    pub fn is_valid(&self) -> bool {
        use crate::modifier::ModifierSet;

        let drag = ModifierSet::from_modifiers(&self.drag);
        let resize = ModifierSet::from_modifiers(&self.resize);
        !drag.is_empty() && !resize.is_empty() && drag != resize
    }
}

impl Config {
    /// Replaces unusable values with safe ones.
    ///
    /// Empty or identical gesture combinations reset both gestures to
    /// their defaults. The log size is clamped to 1..=100 MB.
    pub fn validate(&mut self) {
        if !self.gestures.is_valid() {
            self.gestures = GestureConfig::default();
        }
        self.logging.max_file_mb = self.logging.max_file_mb.clamp(1, 100);
    }
}
