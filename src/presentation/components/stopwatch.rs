//! Stopwatch component
//!
//! The main view: elapsed time, the offered controls and the lap list.

use ratatui::prelude::*;

use crate::{
    core::state::{stopwatch::Control, AppState},
    presentation::{
        control_map::ControlMap,
        widgets::{control_bar::ControlBar, lap_list::LapList, timer_display::TimerDisplay},
    },
};

#[derive(Debug, Clone, Default)]
pub struct StopwatchComponent;

impl StopwatchComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the stopwatch into `area`, registering every clickable region in
    /// `controls`.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, controls: &mut ControlMap) {
        let config = &state.config.config;
        let stopwatch = &state.stopwatch;

        let layout = Layout::vertical([
            Constraint::Length(3), // Elapsed time
            Constraint::Length(1), // Controls
            Constraint::Length(1),
            Constraint::Min(0), // Laps
        ])
        .split(area);

        let timer = TimerDisplay::new(stopwatch.elapsed_seconds(), stopwatch.phase())
            .style(config.styles.style("timer"));
        frame.render_widget(timer, layout[0]);

        let control_bar = ControlBar::new(
            stopwatch.controls().visible(),
            &config.keybindings,
            &config.styles,
        );
        frame.render_stateful_widget(control_bar, layout[1], controls);

        let laps = LapList::new(stopwatch.laps(), Control::DeleteLap, &config.styles)
            .selected(state.ui.selected_lap);
        frame.render_stateful_widget(laps, layout[3], controls);
    }
}
