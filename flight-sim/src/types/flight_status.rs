use super::sim_error::SimError;

/// Represents the various statuses a flight can have.
///
/// Only `EnRoute` flights have their position advanced by the simulator;
/// every other status stays frozen at the origin airport.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlightStatus {
    Scheduled,
    EnRoute,
    Landed,
    Delayed,
    Cancelled,
}

impl FlightStatus {
    /// Converts the `FlightStatus` variant to its corresponding string representation.
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::EnRoute => "En Route",
            FlightStatus::Landed => "Landed",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
        }
    }

    /// Creates a `FlightStatus` variant from a string slice.
    pub fn from_str(status: &str) -> Result<FlightStatus, SimError> {
        match status.to_lowercase().as_str() {
            "scheduled" => Ok(FlightStatus::Scheduled),
            "en route" => Ok(FlightStatus::EnRoute),
            "landed" => Ok(FlightStatus::Landed),
            "delayed" => Ok(FlightStatus::Delayed),
            "cancelled" => Ok(FlightStatus::Cancelled),
            _ => Err(SimError::InvalidStatus(status.to_string())),
        }
    }
}
