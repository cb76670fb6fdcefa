use std::sync::Arc;

use crate::engine::{CompositionController, KeyEventOutcome, ModifierState, TextContext, TextEdit};
use crate::preview::{render_preview, KeyCap};
use crate::types::{EditKey, KeyboardLayout, ModifierKey, PASSTHROUGH_CTRL_CODES};
use super::latch::ModifierLatch;

/// One virtual keyboard attached to one text caret.
///
/// Routes physical key events and on-screen clicks to the modifier latch or
/// the composition controller. A session must not be driven from more than
/// one event source at a time; the layout itself may be shared freely.
#[derive(Debug, Clone)]
pub struct KeyboardSession {
    layout: Arc<KeyboardLayout>,
    modifiers: ModifierLatch,
    composer: CompositionController,
    last_key: Option<String>,
}

impl KeyboardSession {
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        Self {
            layout,
            modifiers: ModifierLatch::new(),
            composer: CompositionController::new(),
            last_key: None,
        }
    }

    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Switch layouts. A pending dead key belongs to the old layout's
    /// tables, so it is dropped.
    pub fn set_layout(&mut self, layout: Arc<KeyboardLayout>) {
        log::debug!("Switching layout {} -> {}", self.layout.locale_name, layout.locale_name);
        self.layout = layout;
        self.composer.reset();
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers.state()
    }

    pub fn pending_dead_key(&self) -> Option<&str> {
        self.composer.pending_dead_key()
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    /// Physical key down.
    ///
    /// `caps_lock` is the platform's lock state when the event carries it.
    pub fn key_down(&mut self, code: &str, caps_lock: Option<bool>, ctx: &TextContext) -> KeyEventOutcome {
        self.last_key = Some(code.to_string());

        if self.modifiers.state().ctrl && PASSTHROUGH_CTRL_CODES.iter().any(|c| *c == code) {
            return KeyEventOutcome::Unhandled;
        }

        if let Some(modifier) = ModifierKey::from_code(code) {
            self.modifiers.press(modifier, caps_lock);
            return KeyEventOutcome::Unhandled;
        }

        self.handle_key(code, ctx)
    }

    /// Physical key up
    pub fn key_up(&mut self, code: &str, caps_lock: Option<bool>) {
        if let Some(modifier) = ModifierKey::from_code(code) {
            self.modifiers.release(modifier, caps_lock);
        }
    }

    /// Click on an on-screen key; modifiers toggle instead of being held
    pub fn click(&mut self, code: &str, ctx: &TextContext) -> KeyEventOutcome {
        self.last_key = Some(code.to_string());

        if let Some(modifier) = ModifierKey::from_code(code) {
            self.modifiers.toggle(modifier);
            return KeyEventOutcome::Consumed;
        }

        self.handle_key(code, ctx)
    }

    /// Insert clipboard text at the caret, bypassing composition
    pub fn paste(&self, text: &str, ctx: &TextContext) -> TextEdit {
        self.composer.paste(text, ctx)
    }

    /// The on-screen keyboard for the current state
    pub fn preview(&self) -> Vec<KeyCap> {
        render_preview(
            &self.layout,
            self.modifiers.state(),
            self.composer.pending_dead_key(),
            self.last_key.as_deref(),
        )
    }

    fn handle_key(&mut self, code: &str, ctx: &TextContext) -> KeyEventOutcome {
        if let Some(key) = EditKey::from_code(code) {
            return KeyEventOutcome::Edit(self.composer.edit_key(&self.layout, key, ctx));
        }

        self.composer
            .press_key(&self.layout, code, self.modifiers.state(), ctx)
    }
}
