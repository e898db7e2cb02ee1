use graphical_interface::MarkerRegistry;

use flight_sim::types::generator::generate_flights;
use flight_sim::{advance_flights, matches, Flight, FlightStatus, SimConfig, StatusFilter};
use rand::{rngs::StdRng, SeedableRng};

fn visible(flights: &[Flight], filter: &StatusFilter, query: &str) -> Vec<Flight> {
    flights
        .iter()
        .filter(|flight| matches(flight, filter, query))
        .cloned()
        .collect()
}

#[test]
fn test_markers_track_filtered_flights_across_ticks() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut flights = generate_flights(40, &mut rng).unwrap();
    let config = SimConfig::default();

    let mut registry = MarkerRegistry::new();
    registry.reconcile(&visible(&flights, &StatusFilter::All, ""));
    assert_eq!(registry.len(), 40);

    // Narrowing to en-route flights shrinks the registry to exactly that
    // subset.
    let filter = StatusFilter::Only(FlightStatus::EnRoute);
    let en_route = visible(&flights, &filter, "");
    registry.reconcile(&en_route);
    assert_eq!(registry.len(), en_route.len());
    for flight in &en_route {
        assert!(registry.get(&flight.icao24).is_some());
    }

    // Ticks move flights but never change which markers exist, and each
    // marker follows its flight's new position.
    for _ in 0..10 {
        flights = advance_flights(&flights, &config, &mut rng);
        let shown = visible(&flights, &filter, "");
        registry.reconcile(&shown);

        assert_eq!(registry.len(), shown.len());
        for flight in &shown {
            let marker = registry.get(&flight.icao24).unwrap();
            assert!((marker.position.lat() - flight.latitude).abs() < 1e-12);
            assert!((marker.position.lon() - flight.longitude).abs() < 1e-12);
            assert!((marker.heading - flight.heading).abs() < 1e-12);
        }
    }
}

#[test]
fn test_clearing_the_filter_restores_all_markers() {
    let mut rng = StdRng::seed_from_u64(11);
    let flights = generate_flights(25, &mut rng).unwrap();

    let mut registry = MarkerRegistry::new();
    registry.reconcile(&visible(&flights, &StatusFilter::All, ""));
    assert_eq!(registry.len(), 25);

    let filter = StatusFilter::Only(FlightStatus::Landed);
    registry.reconcile(&visible(&flights, &filter, ""));
    assert!(registry.len() < 25);

    registry.reconcile(&visible(&flights, &StatusFilter::All, ""));
    assert_eq!(registry.len(), 25);
}

#[test]
fn test_search_query_narrows_markers() {
    let mut rng = StdRng::seed_from_u64(3);
    let flights = generate_flights(30, &mut rng).unwrap();

    let target = flights[4].callsign.clone();
    let mut registry = MarkerRegistry::new();
    registry.reconcile(&visible(&flights, &StatusFilter::All, &target));

    assert!(!registry.is_empty());
    assert!(registry.get(&flights[4].icao24).is_some());
}
