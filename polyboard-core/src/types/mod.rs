pub mod layout;
pub mod key_codes;

pub use layout::*;
pub use key_codes::*;
