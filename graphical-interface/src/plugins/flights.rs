use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Image, Rect, Response, Sense, Vec2};
use flight_sim::Flight;
use walkers::{Plugin, Projector};

use crate::{markers::MarkerRegistry, state::SelectionState};

const SYMBOL_SIZE: f32 = 30.0;

/// Draws one rotated plane icon per visible flight, from its marker in the
/// registry. Hovering shows the marker tooltip; clicking toggles selection.
pub struct FlightMarkers<'a> {
    flights: &'a [Flight],
    registry: &'a MarkerRegistry,
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> FlightMarkers<'a> {
    pub fn new(
        flights: &'a [Flight],
        registry: &'a MarkerRegistry,
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        Self {
            flights,
            registry,
            selection_state,
        }
    }
}

impl Plugin for FlightMarkers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let selected_id = self
            .selection_state
            .borrow()
            .selected_id()
            .map(str::to_string);

        for flight in self.flights {
            // Markers are reconciled before drawing, so a miss only happens
            // for one frame after a filter change.
            let Some(marker) = self.registry.get(&flight.icao24) else {
                continue;
            };

            let screen_position = projector.project(marker.position);
            let symbol_size = Vec2::splat(SYMBOL_SIZE);
            let rect = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

            let response = ui
                .allocate_rect(rect, Sense::click())
                .on_hover_text(&marker.tooltip);

            let is_selected = selected_id.as_deref() == Some(flight.icao24.as_str());
            let image = if is_selected {
                Image::new(include_image!("../../assets/plane-selected.svg"))
            } else {
                Image::new(include_image!("../../assets/plane.svg"))
            };

            // The glyph points east; headings are measured from north.
            let image = image
                .fit_to_exact_size(symbol_size)
                .rotate((marker.heading as f32 - 90.0).to_radians(), Vec2::splat(0.5));

            ui.put(rect, image);

            if response.clicked() {
                self.selection_state
                    .borrow_mut()
                    .toggle_flight_selection(flight);
            }
        }
    }
}
