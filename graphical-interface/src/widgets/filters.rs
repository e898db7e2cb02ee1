use egui::{Color32, RichText};
use flight_sim::{FlightStatus, StatusFilter};

use super::status_color;

const FILTERS: [StatusFilter; 6] = [
    StatusFilter::All,
    StatusFilter::Only(FlightStatus::EnRoute),
    StatusFilter::Only(FlightStatus::Scheduled),
    StatusFilter::Only(FlightStatus::Landed),
    StatusFilter::Only(FlightStatus::Delayed),
    StatusFilter::Only(FlightStatus::Cancelled),
];

/// Renders the status filter list. Returns `true` when the active filter
/// changed this frame.
pub fn show_status_filters(ui: &mut egui::Ui, active: &mut StatusFilter) -> bool {
    let mut changed = false;

    ui.label(RichText::new("FILTER BY STATUS").small().strong());
    ui.add_space(4.0);

    for filter in FILTERS {
        let dot_color = match filter {
            StatusFilter::All => Color32::from_gray(148),
            StatusFilter::Only(status) => status_color(&status),
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new("●").color(dot_color));
            if ui
                .selectable_label(*active == filter, filter.as_str())
                .clicked()
            {
                *active = filter;
                changed = true;
            }
        });
    }

    changed
}
