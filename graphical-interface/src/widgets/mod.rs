mod filters;
mod flight;
pub use filters::show_status_filters;
pub use flight::WidgetFlight;

use egui::Color32;
use flight_sim::FlightStatus;

/// Color coding for flight statuses, shared by the filter panel and the
/// flight detail widget.
pub fn status_color(status: &FlightStatus) -> Color32 {
    match status {
        FlightStatus::EnRoute => Color32::from_rgb(74, 222, 128),
        FlightStatus::Landed => Color32::from_rgb(96, 165, 250),
        FlightStatus::Scheduled => Color32::from_rgb(250, 204, 21),
        FlightStatus::Delayed => Color32::from_rgb(251, 146, 60),
        FlightStatus::Cancelled => Color32::from_rgb(248, 113, 113),
    }
}
