use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhytoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot read image: {reason}")]
    ImageDecodeError { reason: String },

    #[error("Incomplete selection: {message}")]
    IncompleteSelectionError { message: String },

    #[error("Export failed for '{target}': {message}")]
    ExportError { target: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PhytoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PhytoError::ImageDecodeError { .. } | PhytoError::IncompleteSelectionError { .. } => {
                ErrorCategory::Input
            }
            PhytoError::ConfigValidationError { .. }
            | PhytoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PhytoError::CsvError(_)
            | PhytoError::ImageError(_)
            | PhytoError::SerializationError(_)
            | PhytoError::ExportError { .. } => ErrorCategory::Processing,
            PhytoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PhytoError::ImageDecodeError { .. } | PhytoError::ImageError(_) => {
                "Upload a valid PNG or JPEG top-down photo of the plant"
            }
            PhytoError::IncompleteSelectionError { .. } => {
                "Select a value for every field before running the diagnosis"
            }
            PhytoError::ConfigValidationError { .. } => {
                "Check the settings file for TOML syntax errors"
            }
            PhytoError::InvalidConfigValueError { .. } => {
                "Fix the reported value in the settings file or command line"
            }
            PhytoError::CsvError(_) | PhytoError::ExportError { .. } => {
                "Check that the export directory is writable and retry"
            }
            PhytoError::SerializationError(_) => "Retry without the --json flag",
            PhytoError::IoError(_) => "Check that the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PhytoError::ImageDecodeError { reason } => format!("Cannot read image ({})", reason),
            PhytoError::IncompleteSelectionError { message } => message.clone(),
            PhytoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PhytoError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PhytoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = PhytoError::IncompleteSelectionError {
            message: "Please select both location and pattern.".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "Please select both location and pattern."
        );
    }

    #[test]
    fn test_decode_error_message() {
        let err = PhytoError::ImageDecodeError {
            reason: "unsupported format".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot read image: unsupported format");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PhytoError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
