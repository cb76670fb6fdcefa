use crate::types::{EditKey, KeyOutput, KeyboardLayout};
use super::{
    context::TextContext,
    input::ModifierState,
    output::{KeyEventOutcome, TextEdit},
    resolve::resolve_key,
};

/// Dead-key composition state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CompositionState {
    /// No dead key pending
    #[default]
    Idle,
    /// A dead key is waiting for the next key
    Composing(String),
}

/// Owns the pending dead key of one caret and turns resolved outputs into
/// buffer edits.
///
/// Only one dead key can be pending at a time: a second dead key flushes the
/// first literally and takes its place.
#[derive(Debug, Clone, Default)]
pub struct CompositionController {
    state: CompositionState,
}

impl CompositionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CompositionState {
        &self.state
    }

    /// The dead key awaiting composition, if any
    pub fn pending_dead_key(&self) -> Option<&str> {
        match &self.state {
            CompositionState::Idle => None,
            CompositionState::Composing(dead_key) => Some(dead_key),
        }
    }

    /// Drop any pending dead key without emitting it
    pub fn reset(&mut self) {
        self.state = CompositionState::Idle;
    }

    /// Resolve a physical key and feed its output to the state machine.
    ///
    /// Keys without a binding in `layout` are reported as unhandled and leave
    /// the state untouched.
    pub fn press_key(
        &mut self,
        layout: &KeyboardLayout,
        key_id: &str,
        modifiers: ModifierState,
        ctx: &TextContext,
    ) -> KeyEventOutcome {
        match resolve_key(layout, key_id, modifiers) {
            Some(output) => self.apply(layout, output, ctx).into(),
            None => KeyEventOutcome::Unhandled,
        }
    }

    /// Feed a resolved output. Returns `None` when the buffer does not change
    /// (a dead key became pending with nothing to flush).
    pub fn apply(&mut self, layout: &KeyboardLayout, output: &KeyOutput, ctx: &TextContext) -> Option<TextEdit> {
        if !output.is_dead_key {
            return Some(self.compose(layout, &output.value, ctx));
        }

        let previous = std::mem::replace(
            &mut self.state,
            CompositionState::Composing(output.value.clone()),
        );

        match previous {
            CompositionState::Idle => {
                log::debug!("Dead key {:?} pending", output.value);
                None
            }
            CompositionState::Composing(flushed) => {
                log::debug!("Dead key {:?} replaced by {:?}", flushed, output.value);
                Some(TextEdit::insert(&ctx.before, &flushed, &ctx.after))
            }
        }
    }

    /// Insert a non-dead value, combining it with the pending dead key first
    fn compose(&mut self, layout: &KeyboardLayout, value: &str, ctx: &TextContext) -> TextEdit {
        match std::mem::take(&mut self.state) {
            CompositionState::Idle => TextEdit::insert(&ctx.before, value, &ctx.after),
            CompositionState::Composing(dead_key) => match layout.combine(&dead_key, value) {
                Some(result) => {
                    log::debug!("Composed {:?} + {:?} -> {:?}", dead_key, value, result);
                    TextEdit::insert(&ctx.before, result, &ctx.after)
                }
                None => {
                    log::debug!("No combination for {:?} + {:?}", dead_key, value);
                    let raw = format!("{}{}", dead_key, value);
                    TextEdit::insert(&ctx.before, &raw, &ctx.after)
                }
            },
        }
    }

    /// Apply an editing key
    pub fn edit_key(&mut self, layout: &KeyboardLayout, key: EditKey, ctx: &TextContext) -> TextEdit {
        match key {
            EditKey::Backspace => self.backspace(ctx),
            EditKey::Delete => self.delete(ctx),
            EditKey::Enter => self.enter(layout, ctx),
        }
    }

    /// Delete the selection, or the char before the caret
    pub fn backspace(&self, ctx: &TextContext) -> TextEdit {
        if ctx.has_selection() {
            return TextEdit::splice(ctx.before.clone(), &ctx.after);
        }

        let mut head = ctx.before.clone();
        head.pop();
        TextEdit::splice(head, &ctx.after)
    }

    /// Delete the selection, or the char after the caret
    pub fn delete(&self, ctx: &TextContext) -> TextEdit {
        if ctx.has_selection() {
            return TextEdit::splice(ctx.before.clone(), &ctx.after);
        }

        let mut tail = ctx.after.chars();
        tail.next();
        TextEdit::splice(ctx.before.clone(), tail.as_str())
    }

    /// Insert a line break as an ordinary non-dead output
    pub fn enter(&mut self, layout: &KeyboardLayout, ctx: &TextContext) -> TextEdit {
        self.compose(layout, "\n", ctx)
    }

    /// Insert clipboard text literally. Composition is bypassed: a pending
    /// dead key stays pending.
    pub fn paste(&self, text: &str, ctx: &TextContext) -> TextEdit {
        TextEdit::insert(&ctx.before, text, &ctx.after)
    }
}
