//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Context where the parameter was rejected
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        /// Context where the error originated
        context: &'static str,
        /// Detailed error message
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Replace the message of an existing error
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::InvalidLength { .. } => self,
            Self::InvalidParameter { context, .. } => Self::InvalidParameter {
                context,
                message: message.into(),
            },
            Self::Other { context, .. } => Self::Other {
                context,
                message: message.into(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            #[cfg(feature = "std")]
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter in {}", context)
            }
            #[cfg(feature = "std")]
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Error::Other { context } => write!(f, "Error in {}", context),
        }
    }
}
