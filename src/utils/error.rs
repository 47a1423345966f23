use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgscanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid world list input: {message}")]
    InputError { message: String },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl PkgscanError {
    pub fn input(message: impl Into<String>) -> Self {
        PkgscanError::InputError {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        PkgscanError::CatalogError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PkgscanError>;
