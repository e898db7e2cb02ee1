use super::flight::Flight;
use super::flight_status::FlightStatus;

/// Status side of the dashboard filter: everything, or one lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(FlightStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: &FlightStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Whether a flight passes the status filter and the free-text search.
///
/// The query matches case-insensitively against callsign, airline, airport
/// names and airport codes. An empty query matches everything.
pub fn matches(flight: &Flight, filter: &StatusFilter, query: &str) -> bool {
    if !filter.accepts(&flight.status) {
        return false;
    }
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    [
        &flight.callsign,
        &flight.airline,
        &flight.origin.name,
        &flight.destination.name,
        &flight.origin.code,
        &flight.destination.code,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}
