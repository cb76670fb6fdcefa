pub mod types;
pub mod error;
pub mod layout;
pub mod engine;
pub mod preview;
pub mod session;

use std::sync::Arc;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutError, LayoutLoader, LayoutSet};
pub use engine::{
    label_for, resolve, resolve_key, CompositionController, CompositionState, KeyEventOutcome,
    KeyLabel, ModifierState, TextContext, TextEdit,
};
pub use session::KeyboardSession;

/// Open a session on the default layout of a set
pub fn default_session(layouts: &LayoutSet) -> Result<KeyboardSession> {
    let layout: Arc<KeyboardLayout> = layouts.default_layout().ok_or(Error::NoLayouts)?;
    Ok(KeyboardSession::new(layout))
}
