use std::{
    cell::RefCell,
    path::Path,
    rc::Rc,
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};

use egui::{Align2, Context, RichText};
use egui_extras::install_image_loaders;
use flight_sim::{Flight, FlightSource, MockFlightSource, SimConfig, SimError};
use logger::{Color, Logger};
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use crate::{
    markers::MarkerRegistry,
    plugins,
    state::{SelectionState, ViewState},
    story::{StoryFetcher, StoryState},
    toasts::ToastQueue,
    widgets::{self, WidgetFlight},
    windows,
};

const INITIAL_LAT: f64 = 20.0;
const INITIAL_LON: f64 = 0.0;
const WORLD_ZOOM: f64 = 2.0;
const SELECTED_ZOOM: f64 = 7.0;
const SIM_TICK: Duration = Duration::from_secs(5);
const REPAINT_INTERVAL: Duration = Duration::from_millis(500);
const LOG_DIR: &str = "logs";
const STORY_ERROR_TEXT: &str = "An error occurred while generating the flight story.";

/// The main application struct that manages the state and UI of the flight
/// tracker.
///
/// `FlightTrackerApp` owns the tile map, the marker registry, the filter and
/// selection state, the toast queue and the background story worker, and
/// drives the simulation from its update loop.
pub struct FlightTrackerApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    markers: MarkerRegistry,
    flight_widget: Option<WidgetFlight>,
    toasts: ToastQueue,
    stories: StoryFetcher,
    sim_config: SimConfig,
    flight_rx: Receiver<Result<Vec<Flight>, SimError>>,
    loading: bool,
    last_tick: Instant,
    last_selected: Option<String>,
    logger: Option<Logger>,
}

impl FlightTrackerApp {
    /// Creates a new `FlightTrackerApp`, kicking off the initial flight load
    /// on a background thread.
    pub fn new(egui_ctx: Context) -> Self {
        install_image_loaders(&egui_ctx);

        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(WORLD_ZOOM);

        let logger = match Logger::new(Path::new(LOG_DIR)) {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Cannot create log file: {}", e);
                None
            }
        };

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut source = MockFlightSource::default();
            tx.send(source.fetch_flights()).ok();
        });

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state: ViewState::new(),
            markers: MarkerRegistry::new(),
            flight_widget: None,
            toasts: ToastQueue::new(),
            stories: StoryFetcher::new(),
            sim_config: SimConfig::default(),
            flight_rx: rx,
            loading: true,
            last_tick: Instant::now(),
            last_selected: None,
            logger,
        }
    }

    fn log_info(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(message, Color::Green, false);
        }
    }

    fn log_error(&self, message: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.error(message, false);
        }
    }

    fn poll_flight_load(&mut self) {
        if !self.loading {
            return;
        }
        match self.flight_rx.try_recv() {
            Ok(Ok(flights)) => {
                self.log_info(&format!(
                    "Loaded {} flights from the data source.",
                    flights.len()
                ));
                self.toasts.success(format!("Loaded {} flights.", flights.len()));
                self.view_state.set_flights(flights);
                self.markers.reconcile(&self.view_state.visible);
                self.loading = false;
            }
            Ok(Err(e)) => {
                self.log_error(&format!("Flight data load failed: {}", e));
                self.toasts.error("Failed to load flight data.");
                self.loading = false;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.log_error("Flight data loader disconnected before sending.");
                self.toasts.error("Failed to load flight data.");
                self.loading = false;
            }
        }
    }

    fn poll_story(&mut self) {
        let Some(result) = self.stories.poll() else {
            return;
        };
        match result {
            Ok(text) => {
                if let Some(widget) = &mut self.flight_widget {
                    widget.story = StoryState::Ready(text);
                }
            }
            Err(e) => {
                self.log_error(&format!("Story generation failed: {}", e));
                self.toasts
                    .error("Couldn't generate flight story. Please try again.");
                if let Some(widget) = &mut self.flight_widget {
                    widget.story = StoryState::Failed(STORY_ERROR_TEXT.to_string());
                }
            }
        }
    }

    fn run_tick(&mut self) {
        self.view_state.advance(&self.sim_config);
        self.markers.reconcile(&self.view_state.visible);

        // Keep the selection and the open detail widget pointing at the
        // post-tick value of the same flight.
        let selected_id = self
            .selection_state
            .borrow()
            .selected_id()
            .map(str::to_string);
        if let Some(id) = selected_id {
            if let Some(flight) = self.view_state.find(&id).cloned() {
                if let Some(widget) = &mut self.flight_widget {
                    widget.refresh(flight.clone());
                }
                self.selection_state.borrow_mut().flight = Some(flight);
            }
        }
    }

    fn handle_selection_change(&mut self) {
        let selected = self.selection_state.borrow().flight.clone();
        let selected_id = selected.as_ref().map(|f| f.icao24.clone());
        if selected_id == self.last_selected {
            return;
        }

        match selected {
            Some(flight) => {
                self.map_memory
                    .center_at(Position::from_lat_lon(flight.latitude, flight.longitude));
                let _ = self.map_memory.set_zoom(SELECTED_ZOOM);
                self.log_info(&format!(
                    "Selected flight {} ({}).",
                    flight.callsign, flight.icao24
                ));
                self.stories.request(flight.clone());
                self.flight_widget = Some(WidgetFlight::new(flight));
            }
            None => {
                self.flight_widget = None;
                self.map_memory
                    .center_at(Position::from_lat_lon(INITIAL_LAT, INITIAL_LON));
                let _ = self.map_memory.set_zoom(WORLD_ZOOM);
            }
        }
        self.last_selected = selected_id;
    }
}

impl eframe::App for FlightTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_flight_load();
        self.poll_story();

        if !self.loading && self.last_tick.elapsed() >= SIM_TICK {
            self.run_tick();
            self.last_tick = Instant::now();
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("✈ Flight Tracker").heading());
                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.view_state.query)
                        .hint_text("Search callsign, airline or airport...")
                        .desired_width(260.0),
                );
                if response.changed() {
                    self.view_state.apply_filter();
                    self.markers.reconcile(&self.view_state.visible);
                }
                if !self.loading {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!(
                            "{} of {} flights",
                            self.view_state.visible.len(),
                            self.view_state.all_flights.len()
                        ));
                    });
                }
            });
        });

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                if widgets::show_status_filters(ui, &mut self.view_state.status_filter) {
                    self.view_state.apply_filter();
                    self.markers.reconcile(&self.view_state.visible);
                }
            });

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let my_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self.tiles.as_mut();

                let flight_plugin = plugins::FlightMarkers::new(
                    &self.view_state.visible,
                    &self.markers,
                    self.selection_state.clone(),
                );

                let map = Map::new(Some(tiles), &mut self.map_memory, my_position)
                    .with_plugin(flight_plugin);

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
            });

        self.handle_selection_change();

        if let Some(widget) = &mut self.flight_widget {
            if !widget.show(ctx) {
                self.selection_state.borrow_mut().flight = None;
            }
        }

        if self.loading {
            egui::Area::new("loading".into())
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Loading flight data...");
                        });
                    });
                });
        }

        self.toasts.show(ctx);
    }
}
