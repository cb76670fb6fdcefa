//! Modifier tracking for a keyboard that can be driven two ways: physical
//! key press/release, and clicks on the on-screen keys.

use crate::engine::ModifierState;
use crate::types::ModifierKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierLatch {
    state: ModifierState,
}

impl ModifierLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot handed to the engine for one key event
    pub fn state(&self) -> ModifierState {
        self.state
    }

    pub fn is_active(&self, key: ModifierKey) -> bool {
        self.state.get(key)
    }

    /// Physical key down. Caps Lock mirrors the platform lock state when it
    /// is known and toggles otherwise.
    pub fn press(&mut self, key: ModifierKey, platform_caps_lock: Option<bool>) {
        match (key, platform_caps_lock) {
            (ModifierKey::CapsLock, Some(locked)) => self.state.caps_lock = locked,
            (ModifierKey::CapsLock, None) => self.toggle(key),
            _ => *self.slot_mut(key) = true,
        }
    }

    /// Physical key up. Caps Lock is a lock, not a held key, so it only
    /// follows the platform state.
    pub fn release(&mut self, key: ModifierKey, platform_caps_lock: Option<bool>) {
        match key {
            ModifierKey::CapsLock => {
                if let Some(locked) = platform_caps_lock {
                    self.state.caps_lock = locked;
                }
            }
            _ => *self.slot_mut(key) = false,
        }
    }

    /// On-screen key click
    pub fn toggle(&mut self, key: ModifierKey) {
        let slot = self.slot_mut(key);
        *slot = !*slot;
    }

    fn slot_mut(&mut self, key: ModifierKey) -> &mut bool {
        match key {
            ModifierKey::Shift => &mut self.state.shift,
            ModifierKey::Ctrl => &mut self.state.ctrl,
            ModifierKey::Alt => &mut self.state.alt,
            ModifierKey::CapsLock => &mut self.state.caps_lock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut latch = ModifierLatch::new();
        latch.press(ModifierKey::Shift, None);
        assert!(latch.state().shift);
        latch.release(ModifierKey::Shift, None);
        assert!(!latch.state().shift);
    }

    #[test]
    fn test_click_toggles() {
        let mut latch = ModifierLatch::new();
        latch.toggle(ModifierKey::Ctrl);
        latch.toggle(ModifierKey::Alt);
        assert_eq!(latch.state(), ModifierState::new(false, true, true, false));
        latch.toggle(ModifierKey::Ctrl);
        assert!(!latch.is_active(ModifierKey::Ctrl));
    }

    #[test]
    fn test_caps_lock_follows_platform() {
        let mut latch = ModifierLatch::new();
        latch.press(ModifierKey::CapsLock, Some(true));
        assert!(latch.state().caps_lock);
        // releasing the key does not unlock
        latch.release(ModifierKey::CapsLock, None);
        assert!(latch.state().caps_lock);
        latch.release(ModifierKey::CapsLock, Some(false));
        assert!(!latch.state().caps_lock);

        latch.press(ModifierKey::CapsLock, None);
        assert!(latch.state().caps_lock);
    }
}
