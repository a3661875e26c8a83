use thiserror::Error;

/// Unified error type for git-autotag operations
#[derive(Error, Debug)]
pub enum AutotagError {
    #[error("Invalid version component: {input}")]
    Parse { input: String },

    #[error("Invalid format: '{input}' - expected {expected}")]
    Format { input: String, expected: String },

    #[error("Invalid {key}: '{value}' - expected {expected}")]
    Validation {
        key: String,
        value: String,
        expected: String,
    },

    #[error("Tried to bump index {index} of version with only {components} components")]
    Range { index: usize, components: usize },

    #[error("Index {index} is left of the maximum bump index ({maximum})")]
    Policy { index: usize, maximum: usize },

    #[error("Version {version} is longer than {target} components")]
    Length { version: String, target: usize },

    #[error("Component {index} of {version} cannot be incremented")]
    Overflow { version: String, index: usize },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Command failed: {command}\n{stderr}")]
    Command { command: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-autotag
pub type Result<T> = std::result::Result<T, AutotagError>;

impl AutotagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutotagError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutotagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AutotagError::Remote(msg.into())
    }

    pub fn parse(input: impl Into<String>) -> Self {
        AutotagError::Parse {
            input: input.into(),
        }
    }

    pub fn format(input: impl Into<String>, expected: impl Into<String>) -> Self {
        AutotagError::Format {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Create a validation error for a configuration key
    pub fn validation(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        AutotagError::Validation {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}
