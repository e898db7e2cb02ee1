use std::collections::{HashMap, HashSet};

use flight_sim::Flight;
use walkers::Position;

/// View-layer handle for one flight's on-screen plane icon.
///
/// The tooltip is built once at creation; position and heading are patched
/// in place on every reconcile so the marker value survives across ticks.
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: Position,
    pub heading: f64,
    pub tooltip: String,
}

impl Marker {
    fn new(flight: &Flight) -> Self {
        Marker {
            position: Position::from_lat_lon(flight.latitude, flight.longitude),
            heading: flight.heading,
            tooltip: format!(
                "{}\n{} to {}",
                flight.callsign, flight.origin.code, flight.destination.code
            ),
        }
    }

    fn update(&mut self, flight: &Flight) {
        self.position = Position::from_lat_lon(flight.latitude, flight.longitude);
        self.heading = flight.heading;
    }
}

/// The set of live markers, keyed by flight identifier.
///
/// Recreating every marker on each tick would drop transient view state, so
/// the registry is patched with a set-diff instead: update in place, insert
/// new, remove absent.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: HashMap<String, Marker>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, icao24: &str) -> Option<&Marker> {
        self.markers.get(icao24)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.markers.keys().map(String::as_str)
    }

    /// Diffs the registry against the currently displayed flights. After
    /// this call the key set equals exactly the identifier set of `flights`.
    pub fn reconcile(&mut self, flights: &[Flight]) {
        let present: HashSet<&str> = flights.iter().map(|f| f.icao24.as_str()).collect();

        for flight in flights {
            match self.markers.get_mut(&flight.icao24) {
                Some(marker) => marker.update(flight),
                None => {
                    self.markers
                        .insert(flight.icao24.clone(), Marker::new(flight));
                }
            }
        }

        self.markers.retain(|icao24, _| present.contains(icao24.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flight_sim::{Airport, FlightStatus};
    use std::collections::BTreeSet;

    fn test_flight(icao24: &str, lat: f64, lon: f64) -> Flight {
        let now = Utc::now().naive_utc();
        Flight {
            icao24: icao24.to_string(),
            callsign: "LUF402".to_string(),
            airline: "Lufthansa".to_string(),
            aircraft_type: "B737".to_string(),
            origin: Airport::new("London Heathrow".to_string(), "LHR".to_string(), 51.47, -0.45),
            destination: Airport::new(
                "Dubai International".to_string(),
                "DXB".to_string(),
                25.25,
                55.36,
            ),
            departure_time: now,
            arrival_time: now,
            status: FlightStatus::EnRoute,
            latitude: lat,
            longitude: lon,
            altitude: 31000.0,
            speed: 470.0,
            heading: 135.0,
        }
    }

    fn ids(registry: &MarkerRegistry) -> BTreeSet<String> {
        registry.ids().map(str::to_string).collect()
    }

    #[test]
    fn test_reconcile_adds_markers_for_new_flights() {
        let mut registry = MarkerRegistry::new();
        registry.reconcile(&[test_flight("a1", 10.0, 20.0), test_flight("b2", 30.0, 40.0)]);

        assert_eq!(registry.len(), 2);
        let marker = registry.get("a1").unwrap();
        assert_eq!(marker.position.lat(), 10.0);
        assert_eq!(marker.position.lon(), 20.0);
        assert_eq!(marker.tooltip, "LUF402\nLHR to DXB");
    }

    #[test]
    fn test_reconcile_removes_absent_flights() {
        let mut registry = MarkerRegistry::new();
        registry.reconcile(&[test_flight("a1", 10.0, 20.0), test_flight("b2", 30.0, 40.0)]);
        registry.reconcile(&[test_flight("b2", 31.0, 41.0)]);

        assert_eq!(ids(&registry), BTreeSet::from(["b2".to_string()]));
    }

    #[test]
    fn test_reconcile_updates_markers_in_place() {
        let mut registry = MarkerRegistry::new();
        registry.reconcile(&[test_flight("b2", 30.0, 40.0)]);

        // Scribble on the marker; an in-place update must keep it, while a
        // recreated marker would lose it.
        registry.markers.get_mut("b2").unwrap().tooltip = "sentinel".to_string();

        let mut moved = test_flight("b2", 32.0, 42.0);
        moved.heading = 200.0;
        registry.reconcile(&[moved]);

        let marker = registry.get("b2").unwrap();
        assert_eq!(marker.tooltip, "sentinel");
        assert_eq!(marker.position.lat(), 32.0);
        assert_eq!(marker.position.lon(), 42.0);
        assert_eq!(marker.heading, 200.0);
    }

    #[test]
    fn test_key_set_always_matches_input() {
        let mut registry = MarkerRegistry::new();
        registry.reconcile(&[test_flight("a1", 0.0, 0.0)]);
        registry.reconcile(&[
            test_flight("b2", 0.0, 0.0),
            test_flight("c3", 0.0, 0.0),
            test_flight("d4", 0.0, 0.0),
        ]);
        assert_eq!(
            ids(&registry),
            BTreeSet::from(["b2".to_string(), "c3".to_string(), "d4".to_string()])
        );

        registry.reconcile(&[]);
        assert!(registry.is_empty());
    }
}
