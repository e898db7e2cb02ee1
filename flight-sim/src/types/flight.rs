use chrono::NaiveDateTime;

use super::{airport::Airport, flight_status::FlightStatus};

/// Represents a tracked flight, including its route, schedule, status and
/// current position.
///
/// The `icao24` identifier is stable for the lifetime of the flight. Route
/// and schedule attributes never change after creation; latitude, longitude,
/// altitude, speed and heading are advanced by the simulator while the
/// flight is en route.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub icao24: String,
    pub callsign: String,
    pub airline: String,
    pub aircraft_type: String,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub status: FlightStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64, // feet
    pub speed: f64,    // knots
    pub heading: f64,  // degrees, [0, 360)
}

impl Flight {
    /// Whether the flight is currently being advanced by the simulator.
    pub fn is_airborne(&self) -> bool {
        self.status == FlightStatus::EnRoute
    }
}
