use std::thread;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;

use super::airport::Airport;
use super::flight::Flight;
use super::flight_status::FlightStatus;
use super::sim_error::SimError;

const AIRPORT_CATALOG: &str = include_str!("../../data/airports.csv");

const AIRLINES: [&str; 10] = [
    "Lufthansa",
    "Delta",
    "United",
    "Emirates",
    "British Airways",
    "Air France",
    "Ryanair",
    "Southwest",
    "KLM",
    "Qatar Airways",
];

const AIRCRAFT_TYPES: [&str; 7] = ["B737", "A320", "B777", "A380", "B787", "A350", "CRJ900"];

// Cancelled is never generated, but remains filterable in the UI.
const STATUS_CYCLE: [FlightStatus; 4] = [
    FlightStatus::EnRoute,
    FlightStatus::Scheduled,
    FlightStatus::Landed,
    FlightStatus::Delayed,
];

/// A source of flight data. The dashboard only depends on this seam, so the
/// mock generator below can be swapped for a real telemetry feed.
pub trait FlightSource {
    fn fetch_flights(&mut self) -> Result<Vec<Flight>, SimError>;
}

/// Mock feed: a fixed-size randomly generated flight set, returned after an
/// artificial network delay.
pub struct MockFlightSource {
    pub count: usize,
    pub delay: Duration,
}

impl Default for MockFlightSource {
    fn default() -> Self {
        MockFlightSource {
            count: 50,
            delay: Duration::from_millis(1500),
        }
    }
}

impl FlightSource for MockFlightSource {
    fn fetch_flights(&mut self) -> Result<Vec<Flight>, SimError> {
        thread::sleep(self.delay);
        generate_flights(self.count, &mut rand::thread_rng())
    }
}

/// Parses the embedded airport catalog.
pub fn airport_catalog() -> Result<Vec<Airport>, SimError> {
    let mut reader = csv::Reader::from_reader(AIRPORT_CATALOG.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<Airport>, _>>()
        .map_err(|e| SimError::InvalidCatalog(e.to_string()))
}

/// Generates `count` plausible flights over the airport catalog.
///
/// Grounded flights sit at their origin airport with zero altitude and
/// speed; en-route flights are placed partway along the route with a
/// schedule consistent with that progress.
pub fn generate_flights<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<Flight>, SimError> {
    let airports = airport_catalog()?;
    if airports.is_empty() {
        return Err(SimError::InvalidCatalog("catalog is empty".to_string()));
    }

    Ok((0..count)
        .map(|index| generate_flight(index, &airports, rng))
        .collect())
}

fn generate_flight<R: Rng>(index: usize, airports: &[Airport], rng: &mut R) -> Flight {
    let origin = airports[index % airports.len()].clone();
    let destination = airports[(index + 3) % airports.len()].clone();
    let airline = AIRLINES[index % AIRLINES.len()];
    let status = STATUS_CYCLE[index % STATUS_CYCLE.len()];

    let progress: f64 = rng.gen();
    let now = Utc::now().naive_utc();
    let departure_time = now - ChronoDuration::minutes((progress * 8.0 * 60.0) as i64);
    let arrival_time = now + ChronoDuration::minutes(((1.0 - progress) * 8.0 * 60.0) as i64);

    let airborne = status == FlightStatus::EnRoute;
    let (latitude, longitude) = if airborne {
        (
            origin.latitude + (destination.latitude - origin.latitude) * progress,
            origin.longitude + (destination.longitude - origin.longitude) * progress,
        )
    } else {
        (origin.latitude, origin.longitude)
    };

    Flight {
        icao24: format!("a{:06x}", rng.gen_range(0..0x100_0000)),
        callsign: generate_callsign(airline, rng),
        airline: airline.to_string(),
        aircraft_type: AIRCRAFT_TYPES[index % AIRCRAFT_TYPES.len()].to_string(),
        origin,
        destination,
        departure_time,
        arrival_time,
        status,
        latitude,
        longitude,
        altitude: if airborne {
            rng.gen_range(25_000.0..40_000.0_f64).floor()
        } else {
            0.0
        },
        speed: if airborne {
            rng.gen_range(400.0..550.0_f64).floor()
        } else {
            0.0
        },
        heading: rng.gen_range(0.0..360.0),
    }
}

fn generate_callsign<R: Rng>(airline: &str, rng: &mut R) -> String {
    let prefix: String = airline
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    format!("{}{}", prefix, rng.gen_range(100..1000))
}
