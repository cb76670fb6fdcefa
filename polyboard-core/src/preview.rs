//! On-screen keyboard model.
//!
//! The grid is measured in ticks; a standard key is three ticks wide so that
//! staggered rows line up. Rendering it is left to the host.

use crate::engine::{label_for, ModifierState};
use crate::types::{KeyboardLayout, ModifierKey};

pub const KEYBOARD_WIDTH_TICKS: u16 = 45;
pub const KEYBOARD_HEIGHT_KEYS: u16 = 5;

/// One position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    /// Physical key code
    pub code: &'static str,
    /// Width in ticks
    pub width: u16,
    /// Fixed caption shown instead of the layout's label
    pub caption: Option<&'static str>,
    /// Modifier this key shows as pressed
    pub modifier: Option<ModifierKey>,
}

const fn key(code: &'static str) -> KeySlot {
    KeySlot { code, width: 3, caption: None, modifier: None }
}

const fn wide(code: &'static str, width: u16, caption: &'static str) -> KeySlot {
    KeySlot { code, width, caption: Some(caption), modifier: None }
}

const fn modifier(code: &'static str, width: u16, caption: &'static str, modifier: ModifierKey) -> KeySlot {
    KeySlot { code, width, caption: Some(caption), modifier: Some(modifier) }
}

pub const KEYBOARD_ROWS: [&[KeySlot]; 5] = [
    &[
        key("Backquote"), key("Digit1"), key("Digit2"), key("Digit3"), key("Digit4"),
        key("Digit5"), key("Digit6"), key("Digit7"), key("Digit8"), key("Digit9"),
        key("Digit0"), key("Minus"), key("Equal"), key("IntlYen"), wide("Backspace", 3, "«"),
    ],
    &[
        wide("Tab", 4, "Tab"), key("KeyQ"), key("KeyW"), key("KeyE"), key("KeyR"), key("KeyT"),
        key("KeyY"), key("KeyU"), key("KeyI"), key("KeyO"), key("KeyP"), key("BracketLeft"),
        key("BracketRight"), KeySlot { width: 5, ..key("Backslash") },
    ],
    &[
        modifier("CapsLock", 5, "Caps", ModifierKey::CapsLock), key("KeyA"), key("KeyS"),
        key("KeyD"), key("KeyF"), key("KeyG"), key("KeyH"), key("KeyJ"), key("KeyK"),
        key("KeyL"), key("Semicolon"), key("Quote"), wide("Enter", 7, "Enter"),
    ],
    &[
        modifier("ShiftLeft", 4, "Shift", ModifierKey::Shift), key("IntlBackslash"), key("KeyZ"),
        key("KeyX"), key("KeyC"), key("KeyV"), key("KeyB"), key("KeyN"), key("KeyM"),
        key("Comma"), key("Period"), key("Slash"),
        modifier("ShiftRight", 8, "Shift", ModifierKey::Shift),
    ],
    &[
        modifier("ControlLeft", 5, "Ctrl", ModifierKey::Ctrl), wide("MetaLeft", 4, "\u{229e}"),
        modifier("AltLeft", 4, "Alt", ModifierKey::Alt), wide("Space", 15, ""),
        modifier("AltRight", 4, "Alt", ModifierKey::Alt), wide("MetaRight", 4, "\u{229e}"),
        wide("ContextMenu", 4, "\u{2630}"), modifier("ControlRight", 5, "Ctrl", ModifierKey::Ctrl),
    ],
];

/// A rendered key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCap {
    pub code: &'static str,
    pub row: u16,
    /// First tick covered, zero-based
    pub column: u16,
    pub width: u16,
    pub label: String,
    /// Pressing this key would start a composition
    pub is_dead_key: bool,
    /// The label is a composition with the pending dead key
    pub affected_by_dead_key: bool,
    /// The key's modifier is active
    pub pressed: bool,
    /// This was the most recent key event
    pub last_key: bool,
}

/// Lay out every key for the current modifier and dead-key state
pub fn render_preview(
    layout: &KeyboardLayout,
    modifiers: ModifierState,
    pending_dead_key: Option<&str>,
    last_key: Option<&str>,
) -> Vec<KeyCap> {
    let mut caps = Vec::new();

    for (row, slots) in (0u16..).zip(KEYBOARD_ROWS.iter()) {
        let mut column = 0;
        for slot in slots.iter() {
            let label = label_for(layout, slot.code, modifiers, pending_dead_key);
            let (is_dead_key, affected_by_dead_key) = label
                .as_ref()
                .map_or((false, false), |l| (l.is_dead_key, l.composed));

            let text = match (slot.caption, label) {
                (Some(caption), _) => caption.to_string(),
                (None, Some(label)) => label.label,
                (None, None) => String::new(),
            };

            caps.push(KeyCap {
                code: slot.code,
                row,
                column,
                width: slot.width,
                label: text,
                is_dead_key,
                affected_by_dead_key,
                pressed: slot.modifier.map_or(false, |m| modifiers.get(m)),
                last_key: last_key == Some(slot.code),
            });
            column += slot.width;
        }
    }

    caps
}
