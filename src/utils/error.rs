use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrafterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error opening {role} file '{path}': {source}")]
    FileAccess {
        role: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to allocate memory for {what}")]
    ResourceExhausted { what: String },

    #[error("Name on line {line} is {length} bytes long (maximum {max})")]
    NameTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    #[error("Output would contain {requested} lines, exceeding the limit of {limit}")]
    OutputLimitExceeded { requested: u128, limit: u64 },

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

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Resource,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CrafterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CrafterError::IoError(_) | CrafterError::FileAccess { .. } => ErrorCategory::Io,
            CrafterError::ResourceExhausted { .. } => ErrorCategory::Resource,
            CrafterError::NameTooLong { .. } | CrafterError::OutputLimitExceeded { .. } => {
                ErrorCategory::Input
            }
            CrafterError::ConfigError { .. }
            | CrafterError::ConfigValidationError { .. }
            | CrafterError::InvalidConfigValueError { .. }
            | CrafterError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Resource => ErrorSeverity::Critical,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CrafterError::IoError(_) => {
                "Check that the disk is not full and the files are accessible".to_string()
            }
            CrafterError::FileAccess { role, .. } => {
                format!("Make sure the {} file exists and you have permission to access it", role)
            }
            CrafterError::ResourceExhausted { .. } => {
                "Split the name lists into smaller files and run them separately".to_string()
            }
            CrafterError::NameTooLong { max, .. } => format!(
                "Shorten the name, raise --max-name-length above {} or use --overlong truncate",
                max
            ),
            CrafterError::OutputLimitExceeded { .. } => {
                "Raise --max-lines or use smaller name lists".to_string()
            }
            CrafterError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            CrafterError::ConfigError { .. }
            | CrafterError::ConfigValidationError { .. }
            | CrafterError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CrafterError::FileAccess { role, path, source } => {
                format!("Error opening {} file '{}': {}", role, path, source)
            }
            CrafterError::MissingConfigError { field } => {
                format!("Error: {} was not specified", field)
            }
            other => format!("Error: {}", other),
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrafterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_is_critical_io() {
        let err = CrafterError::FileAccess {
            role: "firstnames".to_string(),
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };

        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().contains("firstnames"));
        assert!(err.user_friendly_message().contains("No such file"));
    }

    #[test]
    fn test_missing_config_exits_with_one() {
        let err = CrafterError::MissingConfigError {
            field: "format".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("format"));
    }

    #[test]
    fn test_input_errors_are_medium() {
        let err = CrafterError::OutputLimitExceeded {
            requested: 10,
            limit: 5,
        };

        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            CrafterError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
            CrafterError::ResourceExhausted {
                what: "name list".to_string(),
            },
            CrafterError::NameTooLong {
                line: 1,
                length: 120,
                max: 99,
            },
            CrafterError::ConfigError {
                message: "bad".to_string(),
            },
        ];

        for err in &errors {
            assert!(err.exit_code() > 0, "{:?} should fail the process", err);
        }
    }
}
