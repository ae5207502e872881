#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use thiserror::Error;

/// Specifies errors raised by models and tour construction.
///
/// All of them abort only the call which raised them: a `Country` is never left in a partially
/// modified state as none of its operations mutate it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TourError {
    /// Invalid data passed on entity construction.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// A name of the field which failed validation.
        field: &'static str,
        /// A human readable reason.
        reason: String,
    },

    /// Location is not a member of the country.
    #[error("location '{0}' is not in the country")]
    NotInCountry(String),

    /// Location is a member of the country, but it is not a depot.
    #[error("location '{0}' is not a depot")]
    NotADepot(String),

    /// An index into settlements is out of range.
    #[error("settlement index {index} is out of range, country has {size} settlements")]
    IndexOutOfRange {
        /// A requested index.
        index: usize,
        /// Amount of settlements.
        size: usize,
    },

    /// Distance is negative or not a number.
    #[error("distance must be non-negative, got {0}")]
    InvalidDistance(f64),

    /// Speed is zero, negative or not finite.
    #[error("speed must be positive and finite (division by zero or negative speed), got {0}")]
    InvalidSpeed(f64),

    /// The same location identity (name and region) is used twice.
    #[error("location '{0}' is defined more than once")]
    DuplicateLocation(String),
}

impl TourError {
    /// Creates a validation error for given field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}

/// A type alias for result type with `TourError`.
pub type TourResult<T> = Result<T, TourError>;

/// A string-backed error used on I/O boundaries where failure causes are heterogeneous.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl From<&str> for GenericError {
    fn from(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

impl From<TourError> for GenericError {
    fn from(error: TourError) -> Self {
        Self(error.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(error: std::io::Error) -> Self {
        Self(error.to_string())
    }
}
