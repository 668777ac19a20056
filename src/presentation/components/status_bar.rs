//! Status bar component
//!
//! Displays the latest status message at the bottom of the screen, falling
//! back to a short key hint.

use ratatui::{prelude::*, widgets::Clear};

use crate::{
    core::state::AppState,
    presentation::{config::keybindings::Action, widgets::status_bar::StatusBarWidget},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let widget = StatusBarWidget::new(
            state.system.status_message().map(String::as_str),
            self.hint(state),
        )
        .style(config.styles.style("status"));

        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }

    /// Key hint built from the configured bindings, e.g. `d: delete lap  q: quit`.
    pub fn hint(&self, state: &AppState) -> String {
        let keybindings = &state.config.config.keybindings;
        let mut entries = Vec::new();
        if !state.stopwatch.laps().is_empty() {
            if let Some(key) = keybindings.keys_for(Action::DeleteSelected).first() {
                entries.push(format!("{key}: delete lap"));
            }
        }
        if let Some(key) = keybindings.keys_for(Action::Quit).first() {
            entries.push(format!("{key}: quit"));
        }
        entries.join("  ")
    }
}
