use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Mode;
use crate::config::GestureConfig;

/// Keyboard modifier keys that can take part in a gesture combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Cmd,
    /// The option key.
    Alt,
    Shift,
}

impl Modifier {
    fn flag(self) -> ModifierSet {
        match self {
            Self::Ctrl => ModifierSet::CONTROL,
            Self::Cmd => ModifierSet::COMMAND,
            Self::Alt => ModifierSet::OPTION,
            Self::Shift => ModifierSet::SHIFT,
        }
    }
}

bitflags! {
    /// A set of held modifier keys as reported by the platform.
    ///
    /// Platform crates translate native flag words into this set. Bits
    /// outside [`ModifierSet::GESTURE_MASK`] (caps lock, fn, ...) may be
    /// present and are ignored by [`classify`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ModifierSet: u32 {
        const CONTROL = 1 << 0;
        const COMMAND = 1 << 1;
        const SHIFT = 1 << 2;
        const OPTION = 1 << 3;
        const CAPS_LOCK = 1 << 4;
        const FUNCTION = 1 << 5;
    }
}

impl ModifierSet {
    /// The only keys that take part in classification.
    pub const GESTURE_MASK: Self = Self::CONTROL
        .union(Self::COMMAND)
        .union(Self::SHIFT)
        .union(Self::OPTION);

    /// Builds a set from a list of configured modifiers.
    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        modifiers.iter().map(|m| m.flag()).collect()
    }

    /// Returns only the keys that take part in classification.
    pub fn masked(self) -> Self {
        self.intersection(Self::GESTURE_MASK)
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(ModifierSet, &str); 6] = [
            (ModifierSet::CONTROL, "ctrl"),
            (ModifierSet::OPTION, "alt"),
            (ModifierSet::SHIFT, "shift"),
            (ModifierSet::COMMAND, "cmd"),
            (ModifierSet::CAPS_LOCK, "capslock"),
            (ModifierSet::FUNCTION, "fn"),
        ];

        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&names.join("+"))
    }
}

/// Maps the held modifier set to a gesture mode.
///
/// The set is masked to control, command, shift and option, then
/// compared for exact equality: first against the drag combination,
/// then against the resize combination. Subsets and supersets of a
/// combination classify as [`Mode::None`].
pub fn classify(held: ModifierSet, gestures: &GestureConfig) -> Mode {
    let masked = held.masked();

    if masked == ModifierSet::from_modifiers(&gestures.drag).masked() {
        Mode::Drag
    } else if masked == ModifierSet::from_modifiers(&gestures.resize).masked() {
        Mode::Resize
    } else {
        Mode::None
    }
}
