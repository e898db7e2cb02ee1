use chrono::NaiveDateTime;
use egui::{Color32, RichText};
use flight_sim::Flight;

use crate::story::StoryState;

use super::status_color;

/// Detail panel for the selected flight: route, schedule, live telemetry
/// and the generated flight story.
pub struct WidgetFlight {
    pub selected_flight: Flight,
    pub story: StoryState,
}

impl WidgetFlight {
    pub fn new(selected_flight: Flight) -> Self {
        Self {
            selected_flight,
            story: StoryState::Loading,
        }
    }

    /// Swaps in the post-tick value of the same flight, keeping the story.
    pub fn refresh(&mut self, flight: Flight) {
        self.selected_flight = flight;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let screen_width = ctx.screen_rect().width();

        egui::Window::new(format!("Flight {}", self.selected_flight.callsign))
            .resizable(false)
            .movable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([screen_width - 385.0, 20.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let flight = &self.selected_flight;

                    ui.label(
                        RichText::new(&flight.callsign)
                            .strong()
                            .size(24.0)
                            .color(Color32::from_rgb(14, 165, 233)),
                    );
                    ui.label(RichText::new(&flight.airline).size(16.0).weak());
                    ui.separator();

                    ui.horizontal(|ui| {
                        route_endpoint(
                            ui,
                            &flight.origin.code,
                            &flight.origin.name,
                            flight.departure_time,
                        );
                        ui.label(RichText::new("➜").size(20.0).weak());
                        route_endpoint(
                            ui,
                            &flight.destination.code,
                            &flight.destination.name,
                            flight.arrival_time,
                        );
                    });
                    ui.add_space(10.0);
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Status:").size(16.0).strong());
                        ui.label(
                            RichText::new(flight.status.as_str())
                                .size(16.0)
                                .color(status_color(&flight.status)),
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Aircraft:").size(16.0).strong());
                        ui.label(RichText::new(&flight.aircraft_type).size(16.0));
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Altitude:").size(16.0).strong());
                        let altitude = if flight.is_airborne() {
                            format!("{:.0} ft", flight.altitude)
                        } else {
                            "N/A".to_string()
                        };
                        ui.label(RichText::new(altitude).size(16.0));
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Ground Speed:").size(16.0).strong());
                        let speed = if flight.is_airborne() {
                            format!("{:.0} kts", flight.speed)
                        } else {
                            "N/A".to_string()
                        };
                        ui.label(RichText::new(speed).size(16.0));
                    });
                    ui.add_space(10.0);
                    ui.separator();

                    ui.label(
                        RichText::new("Flight Story")
                            .strong()
                            .size(20.0)
                            .color(Color32::from_rgb(14, 165, 233)),
                    );
                    match &self.story {
                        StoryState::Loading => {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label("Generating a unique story for this flight...");
                            });
                        }
                        StoryState::Ready(text) => {
                            ui.label(RichText::new(text).size(14.0));
                        }
                        StoryState::Failed(message) => {
                            ui.label(
                                RichText::new(message)
                                    .size(14.0)
                                    .color(Color32::from_rgb(248, 113, 113)),
                            );
                        }
                    }
                    ui.add_space(10.0);
                });
            });

        open
    }
}

fn route_endpoint(ui: &mut egui::Ui, code: &str, name: &str, time: NaiveDateTime) {
    ui.vertical(|ui| {
        ui.label(RichText::new(code).strong().size(20.0));
        ui.label(RichText::new(name).size(12.0).weak());
        ui.label(
            RichText::new(format!("{} UTC", time.format("%H:%M")))
                .size(12.0),
        );
    });
}
