use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("No pet at position {index} (collection has {count})")]
    PetNotFound { index: usize, count: usize },
}

impl PetError {
    /// 給操作者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PetError::IoError(e) => format!("Could not access a file: {}", e),
            PetError::SerializationError(_) => "The pet data file is not valid JSON".to_string(),
            PetError::TomlParseError(_) => "The configuration file is not valid TOML".to_string(),
            PetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            PetError::ValidationError { message } => message.clone(),
            PetError::PetNotFound { index, .. } => format!("There is no pet number {}", index + 1),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PetError::IoError(_) => "Check that the data and log paths exist and are writable",
            PetError::SerializationError(_) => {
                "Fix or remove the data file; a missing file starts an empty collection"
            }
            PetError::TomlParseError(_) => "Check the configuration file syntax",
            PetError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or pass it on the command line"
            }
            PetError::ValidationError { .. } => "Enter a different value and try again",
            PetError::PetNotFound { .. } => "Pick a pet from the listed numbers",
        }
    }
}

pub type Result<T> = std::result::Result<T, PetError>;
