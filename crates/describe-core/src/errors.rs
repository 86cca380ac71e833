use thiserror::Error;

/// Result type alias using DescribeError
pub type Result<T> = std::result::Result<T, DescribeError>;

/// Canonical error kind taxonomy
///
/// Describing and comparing never fail; these kinds cover the fallible
/// surfaces around them (configuration, I/O, strict cycle checking). Each
/// kind maps to a stable code for programmatic handling and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfig,
    Io,
    CycleDetected,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
        }
    }
}

/// Errors raised around the describer
#[derive(Error, Debug)]
pub enum DescribeError {
    /// Configuration text could not be parsed or failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Reading a configuration file or writing a diff failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value graph reached the same pointee twice on one path
    #[error("Cycle detected while capturing a value of type {type_name}")]
    CycleDetected { type_name: String },
}

impl DescribeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DescribeError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            DescribeError::Io(_) => ErrorKind::Io,
            DescribeError::CycleDetected { .. } => ErrorKind::CycleDetected,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Build an InvalidConfig error
pub fn invalid_config(reason: impl Into<String>) -> DescribeError {
    DescribeError::InvalidConfig {
        reason: reason.into(),
    }
}
