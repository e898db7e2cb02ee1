use std::fmt;

/// Represents errors that can occur in the flight tracker core.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    SourceUnavailable(String), // The flight feed could not produce data
    InvalidCatalog(String),    // The embedded airport catalog failed to parse
    InvalidStatus(String),     // An unknown flight status string
    Other(String),             // Generic error case with a custom message
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::SourceUnavailable(ref reason) => {
                write!(f, "Flight data source unavailable: {}", reason)
            }
            SimError::InvalidCatalog(ref reason) => {
                write!(f, "Invalid airport catalog: {}", reason)
            }
            SimError::InvalidStatus(ref status) => {
                write!(f, "Invalid flight status: {}", status)
            }
            SimError::Other(ref message) => write!(f, "Error: {}", message),
        }
    }
}
