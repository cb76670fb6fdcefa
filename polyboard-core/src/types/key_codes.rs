//! Physical key codes with behavior that does not come from a layout.
//!
//! Codes follow the layout-independent naming of the DOM `KeyboardEvent.code`
//! values ("KeyA", "ShiftLeft", "Backspace", ...).

/// Keys that edit the buffer directly instead of producing layout output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    Backspace,
    Delete,
    Enter,
}

impl EditKey {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Backspace" => Some(EditKey::Backspace),
            "Delete" => Some(EditKey::Delete),
            "Enter" => Some(EditKey::Enter),
            _ => None,
        }
    }
}

/// Modifier keys tracked by the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Alt,
    CapsLock,
}

impl ModifierKey {
    /// Maps a physical code to its modifier; left and right variants collapse
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ShiftLeft" | "ShiftRight" => Some(ModifierKey::Shift),
            "ControlLeft" | "ControlRight" => Some(ModifierKey::Ctrl),
            "AltLeft" | "AltRight" => Some(ModifierKey::Alt),
            "CapsLock" => Some(ModifierKey::CapsLock),
            _ => None,
        }
    }
}

/// Codes that, combined with Ctrl, are left to the platform
/// (select all, copy, paste).
pub const PASSTHROUGH_CTRL_CODES: &[&str] = &["KeyA", "KeyC", "KeyV"];
