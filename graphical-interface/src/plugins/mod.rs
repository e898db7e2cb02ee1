mod flights;
pub use flights::FlightMarkers;
