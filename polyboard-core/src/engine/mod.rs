//! Polyboard engine - layout resolution and dead-key composition
//!
//! [`resolve`] and [`label_for`] are pure functions over a validated layout.
//! [`CompositionController`] owns the single pending dead key of a caret and
//! turns resolved outputs into buffer edits.

mod composer;
mod context;
mod input;
mod output;
mod resolve;

pub use composer::{CompositionController, CompositionState};
pub use context::TextContext;
pub use input::ModifierState;
pub use output::{KeyEventOutcome, TextEdit};
pub use resolve::{label_for, resolve, resolve_key, KeyLabel};
