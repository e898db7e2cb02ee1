use flight_sim::{matches, tick, Flight, SimConfig, StatusFilter};

/// Tracks which flight, if any, is currently selected on the map.
pub struct SelectionState {
    pub flight: Option<Flight>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { flight: None }
    }

    /// If the provided flight is already selected, it will be deselected.
    /// Otherwise, it will be selected. Identity is the icao24, since the
    /// dynamic attributes change tick over tick.
    pub fn toggle_flight_selection(&mut self, flight: &Flight) {
        match &self.flight {
            Some(selected) if selected.icao24 == flight.icao24 => self.flight = None,
            _ => self.flight = Some(flight.clone()),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.flight.as_ref().map(|f| f.icao24.as_str())
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the full flight set and the filtered subset to display.
pub struct ViewState {
    pub all_flights: Vec<Flight>,
    pub visible: Vec<Flight>,
    pub status_filter: StatusFilter,
    pub query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            all_flights: vec![],
            visible: vec![],
            status_filter: StatusFilter::All,
            query: String::new(),
        }
    }

    pub fn set_flights(&mut self, flights: Vec<Flight>) {
        self.all_flights = flights;
        self.apply_filter();
    }

    /// Recomputes the visible subset from the current filter and query.
    pub fn apply_filter(&mut self) {
        self.visible = self
            .all_flights
            .iter()
            .filter(|flight| matches(flight, &self.status_filter, &self.query))
            .cloned()
            .collect();
    }

    /// Runs one simulation tick over the full set, then refilters.
    pub fn advance(&mut self, config: &SimConfig) {
        self.all_flights = tick(&self.all_flights, config);
        self.apply_filter();
    }

    pub fn find(&self, icao24: &str) -> Option<&Flight> {
        self.all_flights.iter().find(|f| f.icao24 == icao24)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
