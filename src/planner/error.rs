use std::fmt;
use std::io;
use thiserror::Error;

/// Numeric prompts the flight plan and comparison reports ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Distance,
    Headwind,
    FuelPrice,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Distance => write!(f, "distance"),
            InputField::Headwind => write!(f, "headwind"),
            InputField::FuelPrice => write!(f, "fuel price"),
        }
    }
}

/// Why a report stopped before printing its output
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Sorry, aircraft '{0}' not found!")]
    UnknownAircraft(String),

    #[error("Please enter a valid number for {field} (got '{input}')")]
    InvalidNumber { field: InputField, input: String },

    #[error("Invalid {field}: {value} must not be negative")]
    OutOfRange { field: InputField, value: f64 },

    #[error("Input closed")]
    EndOfInput,

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    /// Bad user input: report it and go back to the menu
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReportError::UnknownAircraft(_)
                | ReportError::InvalidNumber { .. }
                | ReportError::OutOfRange { .. }
        )
    }
}
