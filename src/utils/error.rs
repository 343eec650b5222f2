use crate::domain::model::Tradition;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CosmicError {
    #[error("Invalid date: {message}")]
    InvalidDate { message: String },

    #[error("{tradition} resolution failed: {cause}")]
    Resolution { tradition: Tradition, cause: String },

    #[error("Insufficient data for synthesis: {message}")]
    InsufficientData { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Resolver task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CosmicError>;

/// 錯誤嚴重程度，CLI 據此決定退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// 錯誤分類，用於日誌聚合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Resolution,
    Synthesis,
    Configuration,
    System,
}

impl CosmicError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一傳統失敗不影響其他結果
            CosmicError::Resolution { .. } => ErrorSeverity::Low,
            CosmicError::InsufficientData { .. } => ErrorSeverity::Medium,
            CosmicError::InvalidDate { .. }
            | CosmicError::ConfigError { .. }
            | CosmicError::InvalidConfigValueError { .. }
            | CosmicError::MissingConfigError { .. } => ErrorSeverity::High,
            CosmicError::IoError(_)
            | CosmicError::SerializationError(_)
            | CosmicError::TomlError(_)
            | CosmicError::JoinError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CosmicError::InvalidDate { .. } => ErrorCategory::Input,
            CosmicError::Resolution { .. } => ErrorCategory::Resolution,
            CosmicError::InsufficientData { .. } => ErrorCategory::Synthesis,
            CosmicError::ConfigError { .. }
            | CosmicError::InvalidConfigValueError { .. }
            | CosmicError::MissingConfigError { .. }
            | CosmicError::TomlError(_) => ErrorCategory::Configuration,
            CosmicError::IoError(_)
            | CosmicError::SerializationError(_)
            | CosmicError::JoinError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CosmicError::InvalidDate { message } => {
                format!("The birth date is not a valid calendar value: {}", message)
            }
            CosmicError::Resolution { tradition, cause } => {
                format!("The {} tradition could not be calculated: {}", tradition, cause)
            }
            CosmicError::InsufficientData { message } => {
                format!(
                    "Not enough tradition data to build a cosmic signature: {}",
                    message
                )
            }
            CosmicError::ConfigError { message } => format!("Configuration problem: {}", message),
            CosmicError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CosmicError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required but missing", field)
            }
            CosmicError::IoError(e) => format!("File access failed: {}", e),
            CosmicError::SerializationError(e) => format!("Could not encode the profile: {}", e),
            CosmicError::TomlError(e) => format!("Could not parse the config file: {}", e),
            CosmicError::JoinError(e) => format!("A resolver task was lost: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CosmicError::InvalidDate { .. } => {
                "Check the date for a real year-month-day (and hour/minute) combination".to_string()
            }
            CosmicError::Resolution {
                tradition: Tradition::Vedic,
                ..
            } => "Provide --time and --lat/--lon; the vedic calculation needs both".to_string(),
            CosmicError::Resolution { .. } => {
                "Re-run with --verbose to see the failing tradition's input".to_string()
            }
            CosmicError::InsufficientData { .. } => {
                "At least one date-only tradition must resolve; verify the birth date".to_string()
            }
            CosmicError::ConfigError { .. }
            | CosmicError::InvalidConfigValueError { .. }
            | CosmicError::MissingConfigError { .. }
            | CosmicError::TomlError(_) => {
                "Fix the configuration file or CLI flags and retry".to_string()
            }
            CosmicError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            CosmicError::SerializationError(_) | CosmicError::JoinError(_) => {
                "This is an internal failure; re-run with --verbose and report it".to_string()
            }
        }
    }
}
