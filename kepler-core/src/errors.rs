//! Error types shared by the kepler crates.
//!
//! The numeric core never fails: calendar fields and orbital elements flow
//! through the arithmetic as supplied. Errors only come from opt-in
//! validation, from the checked solver call and from loading element sets.
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`InvalidDate`](KeplerError::InvalidDate) | Calendar range checks | No |
//! | [`MathError`](KeplerError::MathError) | Non-finite solver input or output | No |
//! | [`InvalidElements`](KeplerError::InvalidElements) | Orbital element checks | No |
//! | [`DataError`](KeplerError::DataError) | File I/O, JSON decoding | Yes |
//!
//! ```
//! use kepler_core::{KeplerError, MathErrorKind};
//!
//! let err = KeplerError::math_error("position", MathErrorKind::NotFinite, "x is NaN");
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// Classification of numerical failures reported through [`KeplerError::MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is NaN or infinite.
    InvalidInput,
    /// Result is NaN or infinite.
    NotFinite,
}

/// Unified error type for the kepler crates.
#[derive(Error, Debug)]
pub enum KeplerError {
    /// Calendar field outside its range (e.g. month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: u8,
        day: u8,
        message: String,
    },

    /// Numerical domain failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Orbital element outside the domain handled by the two-body model.
    #[error("Invalid orbital element `{field}`: {message}")]
    InvalidElements { field: String, message: String },

    /// Data access failure (file I/O, decoding).
    ///
    /// The only recoverable variant: a corrected file or path may succeed.
    #[error("Data error ({source_kind} - {operation}): {message}")]
    DataError {
        source_kind: String,
        operation: String,
        message: String,
    },
}

pub type KeplerResult<T> = Result<T, KeplerError>;

impl KeplerError {
    pub fn invalid_date(year: i32, month: u8, day: u8, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn invalid_elements(field: &str, reason: &str) -> Self {
        Self::InvalidElements {
            field: field.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn data_error(source_kind: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            source_kind: source_kind.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying with different input data might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}
