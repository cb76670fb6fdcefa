//! Error types for Polyboard

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Layout error: {0}")]
    Layout(#[from] crate::layout::LayoutError),

    #[error("No layouts loaded")]
    NoLayouts,
}

pub type Result<T> = std::result::Result<T, Error>;
