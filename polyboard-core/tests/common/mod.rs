#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use polyboard_core::{
    CompositionController, KeyBinding, KeyEventOutcome, KeyOutput, KeyboardLayout, LayoutSet,
    ModifierState, TextContext, TextEdit,
};

/// Loads one of the built-in layouts
pub fn builtin_layout(locale: &str) -> Arc<KeyboardLayout> {
    LayoutSet::builtin().unwrap().require(locale).unwrap()
}

pub fn no_mods() -> ModifierState {
    ModifierState::default()
}

pub fn shift() -> ModifierState {
    ModifierState::new(true, false, false, false)
}

pub fn caps() -> ModifierState {
    ModifierState::new(false, false, false, true)
}

pub fn alt_gr() -> ModifierState {
    ModifierState::new(false, true, true, false)
}

/// A binding with every override slot populated, each with a distinct value
pub fn full_binding(caps_is_shift: bool) -> KeyBinding {
    KeyBinding {
        caps_is_shift,
        output_default: KeyOutput::literal("default"),
        output_shift: Some(KeyOutput::literal("shift")),
        output_ctrl: Some(KeyOutput::literal("ctrl")),
        output_shift_ctrl: Some(KeyOutput::literal("shiftctrl")),
        output_ctrl_alt: Some(KeyOutput::literal("ctrlalt")),
        output_shift_ctrl_alt: Some(KeyOutput::literal("shiftctrlalt")),
        output_shift_caps: Some(KeyOutput::literal("shiftcaps")),
    }
}

/// A small layout with two dead keys:
/// KeyA/KeyE/KeyQ are letters, Equal is acute, BracketLeft is circumflex.
pub fn accent_layout() -> KeyboardLayout {
    let mut bindings = HashMap::new();
    bindings.insert("KeyA".to_string(), KeyBinding::letter("a", "A"));
    bindings.insert("KeyE".to_string(), KeyBinding::letter("e", "E"));
    bindings.insert("KeyQ".to_string(), KeyBinding::letter("q", "Q"));
    bindings.insert("Space".to_string(), KeyBinding::new(KeyOutput::literal(" ")));
    bindings.insert("Equal".to_string(), KeyBinding::new(KeyOutput::dead("´")));
    bindings.insert("BracketLeft".to_string(), KeyBinding::new(KeyOutput::dead("^")));

    let mut acute = HashMap::new();
    acute.insert("e".to_string(), "é".to_string());
    acute.insert("E".to_string(), "É".to_string());
    acute.insert("a".to_string(), "á".to_string());
    acute.insert(" ".to_string(), "´".to_string());

    let mut circumflex = HashMap::new();
    circumflex.insert("e".to_string(), "ê".to_string());
    circumflex.insert("a".to_string(), "â".to_string());

    let mut dead_keys = HashMap::new();
    dead_keys.insert("´".to_string(), acute);
    dead_keys.insert("^".to_string(), circumflex);

    KeyboardLayout {
        bindings,
        dead_keys,
        locale_name: "xx_ACC".to_string(),
        language_name: "Accents".to_string(),
        flag_region_code: None,
    }
}

/// A text box driven through a composition controller, caret at char offsets
#[derive(Debug, Default)]
pub struct TestEditor {
    pub text: String,
    pub selection: (usize, usize),
    pub controller: CompositionController,
}

impl TestEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor holding `text` with the caret at the end
    pub fn with_text(text: &str) -> Self {
        let end = text.chars().count();
        Self {
            text: text.to_string(),
            selection: (end, end),
            controller: CompositionController::new(),
        }
    }

    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = (start, end);
    }

    pub fn context(&self) -> TextContext {
        TextContext::from_selection(&self.text, self.selection.0, self.selection.1)
    }

    pub fn caret(&self) -> usize {
        self.selection.0
    }

    pub fn apply_edit(&mut self, edit: TextEdit) {
        self.text = edit.text;
        self.selection = (edit.caret, edit.caret);
    }

    pub fn apply(&mut self, outcome: KeyEventOutcome) -> KeyEventOutcome {
        if let KeyEventOutcome::Edit(edit) = &outcome {
            self.apply_edit(edit.clone());
        }
        outcome
    }

    /// Press one physical key through the controller
    pub fn press(&mut self, layout: &KeyboardLayout, key: &str, modifiers: ModifierState) -> KeyEventOutcome {
        let ctx = self.context();
        let outcome = self.controller.press_key(layout, key, modifiers, &ctx);
        self.apply(outcome)
    }

    /// Press a sequence of keys without modifiers
    pub fn type_keys(&mut self, layout: &KeyboardLayout, keys: &[&str]) {
        for key in keys {
            self.press(layout, key, no_mods());
        }
    }
}
