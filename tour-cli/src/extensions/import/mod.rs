//! Import command helpers

mod csv;
pub use self::csv::*;

use std::io::{BufReader, Read};
use tour_core::prelude::{Country, Environment, Float, GenericError};

/// A format error raised when tabular data cannot be turned into a country.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{code}: {cause}, action: '{action}'")]
pub struct FormatError {
    /// An error code.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: &str, cause: String, action: String, details: String) -> Self {
        Self { code: code.to_string(), cause, action, details: Some(details) }
    }
}

impl From<FormatError> for GenericError {
    fn from(error: FormatError) -> Self {
        match &error.details {
            Some(details) => format!("{error}, details: {details}").into(),
            None => error.to_string().into(),
        }
    }
}

/// Specifies how locations are turned into a country.
#[derive(Clone, Debug)]
pub struct ImportOptions {
    /// Travel speed in length units per second.
    pub speed: Float,
    /// Converts names and regions to title case, reporting every change as a warning.
    pub normalize_names: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { speed: tour_core::models::DEFAULT_SPEED, normalize_names: false }
    }
}

/// Imports a country from specific format.
pub fn import_country<R: Read>(
    input_format: &str,
    reader: BufReader<R>,
    options: &ImportOptions,
    environment: &Environment,
) -> Result<Country, GenericError> {
    match input_format {
        "csv" => read_csv_country(reader, options, environment).map_err(GenericError::from),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
