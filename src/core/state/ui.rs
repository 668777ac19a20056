use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Position of the highlighted lap row, used by keyboard deletion
    pub selected_lap: Option<usize>,
}

impl UiState {
    /// UI-specific update function
    /// `lap_count` is the current length of the lap sequence
    pub fn update(&mut self, msg: UiMsg, lap_count: usize) -> Vec<Cmd> {
        self.selected_lap = match msg {
            UiMsg::SelectNext => match self.selected_lap {
                _ if lap_count == 0 => None,
                Some(i) if i + 1 < lap_count => Some(i + 1),
                Some(_) => Some(lap_count - 1),
                None => Some(0),
            },
            UiMsg::SelectPrevious => match self.selected_lap {
                _ if lap_count == 0 => None,
                Some(i) => Some(i.saturating_sub(1).min(lap_count - 1)),
                None => Some(lap_count - 1),
            },
            UiMsg::Unselect => None,
        };
        vec![]
    }

    /// Keeps the selection inside a lap sequence of `lap_count` entries.
    pub fn clamp_selection(&mut self, lap_count: usize) {
        self.selected_lap = match self.selected_lap {
            Some(_) if lap_count == 0 => None,
            Some(i) => Some(i.min(lap_count - 1)),
            None => None,
        };
    }
}
