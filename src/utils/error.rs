use thiserror::Error;

#[derive(Error, Debug)]
pub enum MandiError {
    #[error("Provider request failed: {0}")]
    ProviderError(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {body}")]
    ProviderStatusError { status: u16, body: String },

    #[error("Provider returned an empty or malformed payload")]
    EmptyProviderReply,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl MandiError {
    /// True for failures of the outbound provider call. These are the ones the
    /// fallback policy absorbs; everything else surfaces to the caller.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            MandiError::ProviderError(_)
                | MandiError::ProviderStatusError { .. }
                | MandiError::EmptyProviderReply
        )
    }
}

pub type Result<T> = std::result::Result<T, MandiError>;
