//! Translation of Quartz `CGEventFlags` into [`ModifierSet`].

use core_graphics::event::CGEventFlags;
use grip_core::ModifierSet;

const TABLE: [(CGEventFlags, ModifierSet); 6] = [
    (CGEventFlags::CGEventFlagAlphaShift, ModifierSet::CAPS_LOCK),
    (CGEventFlags::CGEventFlagShift, ModifierSet::SHIFT),
    (CGEventFlags::CGEventFlagControl, ModifierSet::CONTROL),
    (CGEventFlags::CGEventFlagAlternate, ModifierSet::OPTION),
    (CGEventFlags::CGEventFlagCommand, ModifierSet::COMMAND),
    (CGEventFlags::CGEventFlagSecondaryFn, ModifierSet::FUNCTION),
];

/// Converts the flags of a Quartz event into a modifier set.
///
/// Device-dependent bits (left/right key, numeric pad, ...) are dropped.
pub fn from_cg_flags(flags: CGEventFlags) -> ModifierSet {
    TABLE
        .iter()
        .filter(|(mask, _)| flags.contains(*mask))
        .map(|(_, set)| *set)
        .collect()
}
