pub mod error;
pub mod loader;
pub mod registry;

pub use error::{LayoutError, Result};
pub use loader::LayoutLoader;
pub use registry::{LayoutSet, DEFAULT_LOCALE};
