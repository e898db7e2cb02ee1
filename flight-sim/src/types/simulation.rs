use rand::Rng;

use super::flight::Flight;

/// Tunable constants for the position simulator.
///
/// The jitter and scale values are visually tuned for a smooth map, not
/// derived from a physical model. `scale_factor` exaggerates the per-tick
/// displacement so movement is visible at world zoom.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub tick_seconds: f64,
    pub scale_factor: f64,
    pub heading_jitter: f64,  // degrees, symmetric
    pub altitude_jitter: f64, // feet, symmetric
    pub min_altitude: f64,    // feet, floor while airborne
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            tick_seconds: 5.0,
            scale_factor: 2.0,
            heading_jitter: 0.5,
            altitude_jitter: 50.0,
            min_altitude: 1000.0,
        }
    }
}

/// Advances every en-route flight by one tick of dead reckoning.
///
/// Returns a new collection preserving input order and flight identity.
/// Flights that are not en route pass through unchanged. The position math
/// is a planar approximation, fine for visualization but not navigation.
pub fn advance_flights<R: Rng>(flights: &[Flight], config: &SimConfig, rng: &mut R) -> Vec<Flight> {
    flights
        .iter()
        .map(|flight| advance_flight(flight, config, rng))
        .collect()
}

/// Convenience wrapper over [`advance_flights`] using the thread-local RNG.
pub fn tick(flights: &[Flight], config: &SimConfig) -> Vec<Flight> {
    advance_flights(flights, config, &mut rand::thread_rng())
}

fn advance_flight<R: Rng>(flight: &Flight, config: &SimConfig, rng: &mut R) -> Flight {
    if !flight.is_airborne() {
        return flight.clone();
    }

    let heading_rad = flight.heading.to_radians();
    // knots -> degrees per second, stretched by the visual scale factor
    let displacement = flight.speed / 60.0 / 3600.0 * config.tick_seconds * config.scale_factor;

    let altitude = (flight.altitude
        + rng.gen_range(-config.altitude_jitter..=config.altitude_jitter))
    .max(config.min_altitude);

    let mut heading =
        (flight.heading + rng.gen_range(-config.heading_jitter..=config.heading_jitter)) % 360.0;
    if heading < 0.0 {
        heading += 360.0;
    }

    Flight {
        latitude: flight.latitude + displacement * heading_rad.cos(),
        longitude: flight.longitude + displacement * heading_rad.sin(),
        altitude,
        heading,
        ..flight.clone()
    }
}
