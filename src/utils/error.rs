use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required column '{column}' in {table} file")]
    MissingColumn { table: String, column: String },

    #[error("Malformed row in {table} file at line {line}: expected at most {expected} fields, saw {found}")]
    MalformedRow {
        table: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程序退出碼；任何錯誤都不會回傳 0
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::CsvError(_)
            | EtlError::MissingColumn { .. }
            | EtlError::MalformedRow { .. }
            | EtlError::IoError(_) => ErrorCategory::Input,
            EtlError::ZipError(_) | EtlError::SerializationError(_) => ErrorCategory::Output,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 檔案可能暫時被佔用，重跑即可
            EtlError::IoError(_) => ErrorSeverity::Medium,
            EtlError::ZipError(_) | EtlError::SerializationError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MissingColumn { .. } => {
                "Check the header row: IVR details needs 'IVR name' and 'Associated campaign(s)', prompts needs 'IVR Name' and 'Prompt Name'"
            }
            EtlError::CsvError(_) | EtlError::MalformedRow { .. } => {
                "Make sure both inputs are valid comma-separated files; quote cells that contain commas"
            }
            EtlError::IoError(_) => "Check that the input files exist and the output directory is writable",
            EtlError::ZipError(_) | EtlError::SerializationError(_) => {
                "Check free disk space and retry, or drop the zip/json output formats"
            }
            EtlError::MissingConfigError { .. } => {
                "Pass --ivr-details and --prompts, or set them under [source] in the config file"
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => "Fix the configuration value and run again",
            EtlError::ProcessingError { .. } => "Re-run with --verbose to see which step failed",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            _ => format!("Error processing files: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
