use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Participant list is empty. Cannot assign Secret Santa.")]
    EmptyInput,

    #[error("At least two participants are required for Secret Santa, got {count}.")]
    InsufficientParticipants { count: usize },

    #[error("Failed to assign Secret Santa for {giver} due to constraints (attempts: {attempts}). Please check input.")]
    UnsatisfiableConstraints { giver: String, attempts: usize },

    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: u64, message: String },

    #[error("Duplicate participant identifier: {id}")]
    DuplicateParticipant { id: String },

    #[error("Unsupported file format '{file}': {reason}")]
    UnsupportedFormat { file: String, reason: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Assignment,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::EmptyInput
            | SantaError::InsufficientParticipants { .. }
            | SantaError::MalformedInput { .. }
            | SantaError::DuplicateParticipant { .. }
            | SantaError::UnsupportedFormat { .. }
            | SantaError::CsvError(_) => ErrorCategory::Input,
            SantaError::UnsatisfiableConstraints { .. } => ErrorCategory::Assignment,
            SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            SantaError::IoError(_)
            | SantaError::SerializationError(_)
            | SantaError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        // 重新洗牌可能成功
        if self.is_retryable() {
            return ErrorSeverity::Medium;
        }
        match self.category() {
            ErrorCategory::System => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code used by the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, SantaError::UnsatisfiableConstraints { .. })
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SantaError::EmptyInput => {
                "Add at least two participants (name,email) below the header row".to_string()
            }
            SantaError::InsufficientParticipants { .. } => {
                "Secret Santa needs at least two participants".to_string()
            }
            SantaError::UnsatisfiableConstraints { .. } => {
                "Run again, raise --max-attempts, or drop conflicting rows from the previous assignments file".to_string()
            }
            SantaError::MalformedInput { .. } => {
                "Participant rows need 2 columns, previous assignment rows need 4".to_string()
            }
            SantaError::DuplicateParticipant { .. } => {
                "Each participant email must appear only once".to_string()
            }
            SantaError::UnsupportedFormat { .. } => {
                "Upload a .csv or .tsv file (export spreadsheets to CSV first)".to_string()
            }
            SantaError::CsvError(_) => "Check that the file is valid UTF-8 CSV".to_string(),
            SantaError::ConfigValidationError { field, .. }
            | SantaError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and try again", field)
            }
            SantaError::IoError(_) => {
                "Check that the input files exist and the output path is writable".to_string()
            }
            SantaError::SerializationError(_) | SantaError::ZipError(_) => {
                "Try a different output format or disable compression".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("File Processing Error: {}", self),
            ErrorCategory::Assignment => format!("Assignment Error: {}", self),
            ErrorCategory::Config => format!("Invalid Request: {}", self),
            ErrorCategory::System => format!("Unexpected Error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
