use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilestoneError {
    #[error("No birth date supplied")]
    MissingBirthDate,

    #[error("No milestones selected")]
    NoMilestonesSelected,

    #[error("Invalid date: {input}")]
    InvalidDate { input: String },

    #[error("Milestone age {age} is outside the allowed range 1-150")]
    MilestoneOutOfRange { age: i64 },

    #[error("Milestone age {age} is already in the set")]
    DuplicateMilestone { age: u32 },

    #[error("Default milestone {age} cannot be removed")]
    DefaultMilestoneNotRemovable { age: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to parse configuration: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Milestone,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MilestoneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingBirthDate | Self::NoMilestonesSelected | Self::InvalidDate { .. } => {
                ErrorCategory::Input
            }
            Self::MilestoneOutOfRange { .. }
            | Self::DuplicateMilestone { .. }
            | Self::DefaultMilestoneNotRemovable { .. } => ErrorCategory::Milestone,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigParseError { .. }
            | Self::UrlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 新增/移除被拒絕不影響既有結果
            ErrorCategory::Milestone => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for showing to whoever typed the input.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingBirthDate => "Please enter your birthday".to_string(),
            Self::NoMilestonesSelected => "Please select at least one milestone".to_string(),
            Self::InvalidDate { .. } => "Please enter a valid date".to_string(),
            Self::MilestoneOutOfRange { age } => {
                format!("{} is not a valid milestone age", age)
            }
            Self::DuplicateMilestone { age } => format!("The {} milestone is already listed", age),
            Self::DefaultMilestoneNotRemovable { age } => {
                format!("The {} milestone is a default and cannot be removed", age)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingBirthDate => "Pass --birthday YYYY-MM-DD or --from-url with a shared link",
            Self::NoMilestonesSelected => "Select at least one age, e.g. --only 18,21",
            Self::InvalidDate { .. } => "Use the YYYY-MM-DD format with a real calendar date",
            Self::MilestoneOutOfRange { .. } => "Use a whole number between 1 and 150",
            Self::DuplicateMilestone { .. } => "The age is already present, nothing to add",
            Self::DefaultMilestoneNotRemovable { .. } => {
                "Enable allow_remove_defaults to remove default ages"
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigParseError { .. } => "Check the configuration file and CLI flags",
            Self::UrlError(_) => "Check that the URL is absolute, e.g. https://example.com/",
            Self::IoError(_) => "Check file paths and permissions",
            Self::SerializationError(_) | Self::CsvError(_) => "Try a different output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, MilestoneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        assert_eq!(MilestoneError::MissingBirthDate.severity(), ErrorSeverity::Medium);
        assert_eq!(
            MilestoneError::NoMilestonesSelected.category(),
            ErrorCategory::Input
        );
    }

    #[test]
    fn test_rejected_mutations_are_low_severity() {
        let err = MilestoneError::DuplicateMilestone { age: 30 };
        assert_eq!(err.category(), ErrorCategory::Milestone);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "The 30 milestone is already listed");
    }

    #[test]
    fn test_invalid_date_message() {
        let err = MilestoneError::InvalidDate {
            input: "2021-02-29".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid date: 2021-02-29");
        assert_eq!(err.user_friendly_message(), "Please enter a valid date");
    }
}
