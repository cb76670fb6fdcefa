//! Layout resolution: physical key + modifiers -> output.
//!
//! Everything here is a pure function of its arguments.

use crate::types::{KeyBinding, KeyOutput, KeyboardLayout};
use super::input::ModifierState;

/// Resolve the output of a binding under the given modifiers.
///
/// Total over every binding: when no override applies the default output is
/// returned.
pub fn resolve(binding: &KeyBinding, modifiers: ModifierState) -> &KeyOutput {
    let ModifierState { shift, ctrl, alt, caps_lock } = modifiers;

    // Caps+Shift is only distinct from either alone when the layout says so
    if caps_lock && shift {
        if let Some(output) = &binding.output_shift_caps {
            return output;
        }
    }

    // For letter keys Caps Lock and Shift cancel each other out
    let effective_shift = if binding.caps_is_shift {
        caps_lock != shift
    } else {
        shift
    };

    // Most specific combination first. Alt alone and Shift+Alt have no slot.
    let candidates = [
        (&binding.output_shift_ctrl_alt, effective_shift && ctrl && alt),
        (&binding.output_ctrl_alt, ctrl && alt),
        (&binding.output_shift_ctrl, effective_shift && ctrl),
        (&binding.output_ctrl, ctrl),
        (&binding.output_shift, effective_shift),
    ];

    candidates
        .into_iter()
        .find_map(|(output, guard)| output.as_ref().filter(|_| guard))
        .unwrap_or(&binding.output_default)
}

/// Resolve a physical key in a layout; `None` means the key has no binding
/// and the event should be left to the platform.
pub fn resolve_key<'a>(
    layout: &'a KeyboardLayout,
    key_id: &str,
    modifiers: ModifierState,
) -> Option<&'a KeyOutput> {
    layout.binding(key_id).map(|binding| resolve(binding, modifiers))
}

/// What a key currently displays on the on-screen keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLabel {
    /// Text shown on the key
    pub label: String,
    /// Pressing the key would start a new composition
    pub is_dead_key: bool,
    /// The label is the result of combining with the pending dead key
    pub composed: bool,
}

/// Preview the label of a key without touching any state.
///
/// `is_dead_key` reflects whether the resolved value is itself a dead key in
/// this layout, regardless of what is currently pending.
pub fn label_for(
    layout: &KeyboardLayout,
    key_id: &str,
    modifiers: ModifierState,
    pending_dead_key: Option<&str>,
) -> Option<KeyLabel> {
    let output = resolve_key(layout, key_id, modifiers)?;
    let is_dead_key = layout.is_dead_key(&output.value);

    let composed = pending_dead_key.and_then(|dead_key| layout.combine(dead_key, &output.value));

    Some(match composed {
        Some(result) => KeyLabel {
            label: result.to_string(),
            is_dead_key,
            composed: true,
        },
        None => KeyLabel {
            label: output.value.clone(),
            is_dead_key,
            composed: false,
        },
    })
}
