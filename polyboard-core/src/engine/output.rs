//! Output representation for the composition controller

/// A buffer replacement to apply after a key event.
///
/// The caret is a collapsed selection counted in chars. Apply it only once
/// the new text has been committed to the view, or the view will reset it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// The complete new buffer
    pub text: String,
    /// Caret position within `text`
    pub caret: usize,
}

impl TextEdit {
    /// Replace the selection with `inserted`, placing the caret after it
    pub fn insert(before: &str, inserted: &str, after: &str) -> Self {
        Self::splice(format!("{}{}", before, inserted), after)
    }

    /// Build a buffer from `head` and `tail` with the caret between them
    pub fn splice(head: String, tail: &str) -> Self {
        let caret = head.chars().count();
        let mut text = head;
        text.push_str(tail);
        Self { text, caret }
    }
}

/// Result of routing one key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEventOutcome {
    /// Not intercepted; let the platform's default behavior happen
    Unhandled,
    /// Intercepted, but the buffer does not change (e.g. a dead key is now pending)
    Consumed,
    /// Intercepted; replace the buffer and move the caret
    Edit(TextEdit),
}

impl KeyEventOutcome {
    /// Whether the platform default should be suppressed
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyEventOutcome::Unhandled)
    }

    /// The edit to apply, if any
    pub fn edit(&self) -> Option<&TextEdit> {
        match self {
            KeyEventOutcome::Edit(edit) => Some(edit),
            _ => None,
        }
    }
}

impl From<Option<TextEdit>> for KeyEventOutcome {
    fn from(edit: Option<TextEdit>) -> Self {
        edit.map_or(KeyEventOutcome::Consumed, KeyEventOutcome::Edit)
    }
}
