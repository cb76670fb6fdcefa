mod common;

use common::*;
use polyboard_core::preview::{render_preview, KEYBOARD_WIDTH_TICKS};
use polyboard_core::{default_session, KeyEventOutcome, KeyboardSession, LayoutSet, TextContext};
use pretty_assertions::assert_eq;

/// Text box state as the host would keep it
struct Host {
    text: String,
    caret: usize,
}

impl Host {
    fn new() -> Self {
        Self { text: String::new(), caret: 0 }
    }

    fn context(&self) -> TextContext {
        TextContext::at_caret(&self.text, self.caret)
    }

    fn apply(&mut self, outcome: &KeyEventOutcome) {
        if let Some(edit) = outcome.edit() {
            self.text = edit.text.clone();
            self.caret = edit.caret;
        }
    }

    fn key_down(&mut self, session: &mut KeyboardSession, code: &str) -> KeyEventOutcome {
        let ctx = self.context();
        let outcome = session.key_down(code, None, &ctx);
        self.apply(&outcome);
        outcome
    }

    fn click(&mut self, session: &mut KeyboardSession, code: &str) -> KeyEventOutcome {
        let ctx = self.context();
        let outcome = session.click(code, &ctx);
        self.apply(&outcome);
        outcome
    }
}

#[test]
fn test_default_session_is_english() {
    let set = LayoutSet::builtin().unwrap();
    let session = default_session(&set).unwrap();
    assert_eq!(session.layout().locale_name, "en_US");

    assert!(default_session(&LayoutSet::new()).is_err());
}

#[test]
fn test_physical_typing_with_shift() {
    let mut session = KeyboardSession::new(builtin_layout("en_US"));
    let mut host = Host::new();

    host.key_down(&mut session, "KeyH");
    // Holding shift is left to the platform but tracked
    assert_eq!(host.key_down(&mut session, "ShiftLeft"), KeyEventOutcome::Unhandled);
    host.key_down(&mut session, "KeyI");
    session.key_up("ShiftLeft", None);
    host.key_down(&mut session, "Digit1");

    assert_eq!(host.text, "hI1");
    assert_eq!(host.caret, 3);
}

#[test]
fn test_clicked_modifiers_toggle() {
    let mut session = KeyboardSession::new(builtin_layout("en_US"));
    let mut host = Host::new();

    assert_eq!(host.click(&mut session, "ShiftRight"), KeyEventOutcome::Consumed);
    assert!(session.modifiers().shift);
    host.click(&mut session, "KeyA");
    // Still latched until clicked again
    host.click(&mut session, "KeyB");
    host.click(&mut session, "ShiftLeft");
    host.click(&mut session, "KeyC");

    assert_eq!(host.text, "ABc");
}

#[test]
fn test_caps_lock_from_platform() {
    let mut session = KeyboardSession::new(builtin_layout("en_US"));
    let mut host = Host::new();

    let ctx = host.context();
    session.key_down("CapsLock", Some(true), &ctx);
    session.key_up("CapsLock", Some(true));
    host.key_down(&mut session, "KeyQ");
    host.key_down(&mut session, "Digit2");

    assert_eq!(host.text, "Q2");
}

#[test]
fn test_ctrl_shortcuts_pass_through() {
    let mut session = KeyboardSession::new(builtin_layout("en_US"));
    let mut host = Host::new();

    host.key_down(&mut session, "ControlLeft");
    for code in ["KeyA", "KeyC", "KeyV"] {
        assert_eq!(host.key_down(&mut session, code), KeyEventOutcome::Unhandled);
    }
    assert_eq!(host.text, "");
    assert_eq!(session.last_key(), Some("KeyV"));
}

#[test]
fn test_unmapped_keys_unhandled() {
    let mut session = KeyboardSession::new(builtin_layout("en_US"));
    let mut host = Host::new();

    assert_eq!(host.key_down(&mut session, "F5"), KeyEventOutcome::Unhandled);
    assert_eq!(host.key_down(&mut session, "Tab"), KeyEventOutcome::Unhandled);
}

#[test]
fn test_german_dead_keys_and_editing() {
    let mut session = KeyboardSession::new(builtin_layout("de_DE"));
    let mut host = Host::new();

    for code in ["KeyC", "KeyA", "KeyF", "Equal", "KeyE"] {
        host.key_down(&mut session, code);
    }
    assert_eq!(host.text, "café");

    host.key_down(&mut session, "Enter");
    host.key_down(&mut session, "Backquote");
    assert_eq!(session.pending_dead_key(), Some("^"));
    host.key_down(&mut session, "KeyO");
    assert_eq!(host.text, "café\nô");

    host.key_down(&mut session, "Backspace");
    assert_eq!(host.text, "café\n");
    assert_eq!(host.caret, 5);
}

#[test]
fn test_paste_through_session() {
    let mut session = KeyboardSession::new(builtin_layout("de_DE"));
    let mut host = Host::new();

    host.key_down(&mut session, "Equal");
    let edit = session.paste("Grüße", &host.context());
    assert_eq!(edit.text, "Grüße");
    assert_eq!(edit.caret, 5);
    assert_eq!(session.pending_dead_key(), Some("´"));
}

#[test]
fn test_layout_switch_drops_pending() {
    let mut session = KeyboardSession::new(builtin_layout("de_DE"));
    let mut host = Host::new();

    host.key_down(&mut session, "Equal");
    session.set_layout(builtin_layout("fr_FR"));
    assert_eq!(session.pending_dead_key(), None);

    host.key_down(&mut session, "KeyQ");
    assert_eq!(host.text, "a");
}

#[test]
fn test_preview_reflects_state() {
    let mut session = KeyboardSession::new(builtin_layout("de_DE"));
    let mut host = Host::new();

    host.key_down(&mut session, "ShiftLeft");
    let caps = session.preview();
    let find = |code: &str| caps.iter().find(|c| c.code == code).unwrap().clone();

    assert_eq!(find("KeyA").label, "A");
    assert!(find("ShiftLeft").pressed);
    assert!(find("ShiftRight").pressed);
    assert!(!find("ControlLeft").pressed);
    assert!(find("ShiftLeft").last_key);
    assert_eq!(find("Tab").label, "Tab");
    // Shift+Equal is the grave dead key
    assert_eq!(find("Equal").label, "`");
    assert!(find("Equal").is_dead_key);
    assert_eq!(find("IntlYen").label, "");

    session.key_up("ShiftLeft", None);
    host.key_down(&mut session, "Equal");
    let caps = session.preview();
    let key_e = caps.iter().find(|c| c.code == "KeyE").unwrap();
    assert_eq!(key_e.label, "é");
    assert!(key_e.affected_by_dead_key);
}

#[test]
fn test_preview_geometry() {
    let layout = builtin_layout("en_US");
    let caps = render_preview(&layout, no_mods(), None, None);

    let space = caps.iter().find(|c| c.code == "Space").unwrap();
    assert_eq!((space.row, space.column, space.width), (4, 13, 15));

    for row in 0..5 {
        let last = caps.iter().filter(|c| c.row == row).last().unwrap();
        assert_eq!(last.column + last.width, KEYBOARD_WIDTH_TICKS);
    }
}
