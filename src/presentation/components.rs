//! Component collection and management
//!
//! Components are stateless renderers that receive `AppState` as a parameter.
//! The only thing kept between frames is the [`ControlMap`] built by the last
//! render, which mouse clicks are resolved against.

use ratatui::prelude::*;

use crate::{
    core::state::{stopwatch::Control, AppState},
    presentation::control_map::ControlMap,
};

pub mod status_bar;
pub mod stopwatch;

pub use status_bar::StatusBarComponent;
pub use stopwatch::StopwatchComponent;

pub struct Components {
    pub stopwatch: StopwatchComponent,
    pub status_bar: StatusBarComponent,
    control_map: ControlMap,
}

impl Components {
    pub fn new() -> Self {
        Self {
            stopwatch: StopwatchComponent::new(),
            status_bar: StatusBarComponent::new(),
            control_map: ControlMap::new(),
        }
    }

    /// Render all components, rebuilding the control map from scratch.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        self.control_map.clear();

        let layout = Layout::vertical([
            Constraint::Min(0),    // Stopwatch
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

        self.stopwatch
            .view(state, frame, layout[0], &mut self.control_map);
        self.status_bar.view(state, frame, layout[1]);
    }

    /// The control rendered at a screen cell by the last frame, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.control_map.hit(column, row)
    }

    pub fn control_map(&self) -> &ControlMap {
        &self.control_map
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
