use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmashlyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error on slot '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Racket not found in catalog: {nombre}")]
    RacketNotFound { nombre: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SmashlyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmashlyError::ApiError(_) | SmashlyError::ApiStatus { .. } => ErrorCategory::Network,
            SmashlyError::IoError(_) | SmashlyError::StorageError { .. } => ErrorCategory::Storage,
            SmashlyError::CsvError(_) | SmashlyError::SerializationError(_) => ErrorCategory::Data,
            SmashlyError::ConfigError { .. }
            | SmashlyError::ConfigValidationError { .. }
            | SmashlyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SmashlyError::RacketNotFound { .. } => ErrorCategory::NotFound,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 網路錯誤值得重試，其餘不重試
    pub fn is_retryable(&self) -> bool {
        match self {
            SmashlyError::ApiError(e) => e.is_timeout() || e.is_connect(),
            SmashlyError::ApiStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the catalog API is reachable and retry, or use --offline",
            ErrorCategory::Storage => "Check that the data directory exists and is writable",
            ErrorCategory::Data => "The stored or received data is malformed; try `smashly clear`",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::NotFound => "Run `smashly catalog --search <text>` to find the exact name",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmashlyError::ApiError(_) | SmashlyError::ApiStatus { .. } => {
                format!("No se pudo consultar el catálogo: {}", self)
            }
            SmashlyError::RacketNotFound { nombre } => {
                format!("No se encontró la pala \"{}\" en el catálogo", nombre)
            }
            SmashlyError::ConfigError { .. }
            | SmashlyError::ConfigValidationError { .. }
            | SmashlyError::InvalidConfigValueError { .. } => format!("Configuración inválida: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmashlyError>;
