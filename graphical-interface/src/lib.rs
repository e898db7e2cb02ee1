mod map;
mod markers;
mod plugins;
mod state;
mod story;
mod toasts;
mod widgets;
mod windows;

pub use markers::{Marker, MarkerRegistry};
pub use state::{SelectionState, ViewState};

use map::FlightTrackerApp;

pub fn run() -> Result<(), eframe::Error> {
    eframe::run_native(
        "Flight Tracker",
        Default::default(),
        Box::new(|cc| Ok(Box::new(FlightTrackerApp::new(cc.egui_ctx.clone())))),
    )
}
