//! Event routing between the host UI and the engine

mod keyboard;
mod latch;

pub use keyboard::KeyboardSession;
pub use latch::ModifierLatch;
