use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binding for key '{key}' has no output_default")]
    MissingDefaultOutput { key: String },

    #[error("Binding with an empty key identifier")]
    EmptyKeyId,

    #[error("Binding for key '{key}' has an empty value in {slot}")]
    EmptyOutputValue { key: String, slot: &'static str },

    #[error("Layout has an empty locale_name")]
    EmptyLocaleName,

    #[error("Layout '{0}' has an empty language_name")]
    EmptyLanguageName(String),

    #[error("Layout '{0}' declares a dead key with an empty value")]
    EmptyDeadKey(String),

    #[error("Duplicate layout for locale '{0}'")]
    DuplicateLocale(String),

    #[error("No layout for locale '{0}'")]
    UnknownLocale(String),

    #[error("Failed to read layout asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
