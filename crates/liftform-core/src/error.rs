//! Error types for the liftform core.
//!
//! The analysis pipeline itself is total over its inputs and never fails;
//! errors here cover the few validated construction and parsing points,
//! using [`thiserror`] for `Display` and `Error` implementations.
//!
//! # Example
//!
//! ```rust
//! use liftform_core::{CoreError, PoseSeries};
//!
//! let result = PoseSeries::new(0.0, Vec::new());
//! assert!(matches!(result, Err(CoreError::Validation { .. })));
//! ```

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by core type construction and parsing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Validation error for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what validation failed
        message: String,
    },

    /// Joint discriminant outside the tracked set
    #[error("Unknown joint value: {value}")]
    UnknownJoint {
        /// The rejected discriminant
        value: u8,
    },

    /// Lift name that matches no supported lift
    #[error("Unknown lift type: '{name}'")]
    UnknownLift {
        /// The rejected name
        name: String,
    },
}

impl CoreError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new unknown-joint error.
    #[must_use]
    pub const fn unknown_joint(value: u8) -> Self {
        Self::UnknownJoint { value }
    }

    /// Creates a new unknown-lift error.
    #[must_use]
    pub fn unknown_lift(name: impl Into<String>) -> Self {
        Self::UnknownLift { name: name.into() }
    }
}
