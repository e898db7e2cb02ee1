pub mod types;

pub use types::airport::Airport;
pub use types::filter::{matches, StatusFilter};
pub use types::flight::Flight;
pub use types::flight_status::FlightStatus;
pub use types::generator::{FlightSource, MockFlightSource};
pub use types::sim_error::SimError;
pub use types::simulation::{advance_flights, tick, SimConfig};
