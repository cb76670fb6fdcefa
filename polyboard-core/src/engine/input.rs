//! Modifier input for the resolution engine

use crate::types::ModifierKey;

/// Modifier state sampled at the moment of a key event.
///
/// The engine takes this as already-resolved booleans; how they were derived
/// (held physical keys, toggled on-screen keys) is the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub caps_lock: bool,
}

impl ModifierState {
    /// Creates a new modifier state
    pub fn new(shift: bool, ctrl: bool, alt: bool, caps_lock: bool) -> Self {
        Self {
            shift,
            ctrl,
            alt,
            caps_lock,
        }
    }

    /// Checks if any of Shift, Ctrl or Alt is held
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt
    }

    /// Whether the given modifier is active
    pub fn get(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Alt => self.alt,
            ModifierKey::CapsLock => self.caps_lock,
        }
    }

    /// All 16 combinations of the four modifiers
    pub fn all_combinations() -> impl Iterator<Item = ModifierState> {
        (0u8..16).map(|bits| {
            ModifierState::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
        })
    }
}
