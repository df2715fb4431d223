use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Post request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot pop from an empty list")]
    EmptyListError,

    #[error("Deferred value rejected: {reason}")]
    RejectedError { reason: String },

    #[error("Post source returned status {status}")]
    SourceStatusError { status: u16 },

    #[error("Unknown role code: {code}")]
    UnknownRoleError { code: u8 },

    #[error("Unknown language code: {code}")]
    UnknownLanguageError { code: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
