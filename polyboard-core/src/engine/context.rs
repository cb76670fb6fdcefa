//! Text insertion context

/// The text buffer split around the current selection.
///
/// The controller never sees cursor state directly, only this partition.
/// With a collapsed selection `selected` is empty and the caret sits between
/// `before` and `after`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextContext {
    pub before: String,
    pub selected: String,
    pub after: String,
}

impl TextContext {
    /// Creates a context from its three parts
    pub fn new(before: impl Into<String>, selected: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            selected: selected.into(),
            after: after.into(),
        }
    }

    /// Creates a context with a collapsed caret at char offset `caret`
    pub fn at_caret(text: &str, caret: usize) -> Self {
        Self::from_selection(text, caret, caret)
    }

    /// Split `text` at the char offsets `start..end`.
    ///
    /// Offsets past the end of the text are clamped; a reversed range
    /// collapses to `start`.
    pub fn from_selection(text: &str, start: usize, end: usize) -> Self {
        let end = end.max(start);
        let start_byte = byte_offset(text, start);
        let end_byte = byte_offset(text, end);

        Self {
            before: text[..start_byte].to_string(),
            selected: text[start_byte..end_byte].to_string(),
            after: text[end_byte..].to_string(),
        }
    }

    /// Whether a non-empty selection exists
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The full buffer this context was taken from
    pub fn text(&self) -> String {
        [self.before.as_str(), self.selected.as_str(), self.after.as_str()].concat()
    }
}

/// Byte index of the char offset `chars`, clamped to the end of `text`
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(index, _)| index)
}
