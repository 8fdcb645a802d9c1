use std::fmt;

use serde::{Deserialize, Serialize};

/// The current gesture type, derived purely from held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pointer movement resizes the target window.
    Resize,
    /// Pointer movement moves the target window.
    Drag,
    /// No gesture in progress.
    #[default]
    None,
}

impl Mode {
    /// Returns whether this mode needs mouse-move events.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resize => "resize",
            Self::Drag => "drag",
            Self::None => "none",
        };
        f.write_str(name)
    }
}
