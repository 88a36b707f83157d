use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkylineError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("Output file already exists: {path}")]
    OutputExists { path: String },

    #[error("No buildings in input")]
    EmptyInput,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SkylineError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SkylineError::ConfigError { .. } | SkylineError::ValidationError { .. } => {
                ErrorSeverity::Medium
            }
            SkylineError::InputNotFound { .. }
            | SkylineError::InvalidRecord { .. }
            | SkylineError::OutputExists { .. }
            | SkylineError::EmptyInput
            | SkylineError::CsvError(_) => ErrorSeverity::High,
            SkylineError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SkylineError::InputNotFound { path } => {
                format!("The selected input file does not exist: {}", path)
            }
            SkylineError::InvalidRecord { line, message } => {
                format!("Line {} is not a valid building record ({})", line, message)
            }
            SkylineError::OutputExists { path } => {
                format!("The output file {} already exists and cannot be overwritten", path)
            }
            SkylineError::EmptyInput => "The input file contains no buildings".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SkylineError::InputNotFound { .. } => "Check the input file path",
            SkylineError::InvalidRecord { .. } | SkylineError::CsvError(_) => {
                "Each line must hold three integers: left,right,height"
            }
            SkylineError::OutputExists { .. } => "Choose a new output file or remove the old one",
            SkylineError::EmptyInput => "Add at least one building to the input file",
            SkylineError::ConfigError { .. } | SkylineError::ValidationError { .. } => {
                "Run with -h to see the accepted arguments"
            }
            SkylineError::IoError(_) => "Check file permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkylineError>;
