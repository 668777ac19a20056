use ratatui::layout::{Position, Rect};

use crate::core::state::stopwatch::Control;

/// Screen regions of the controls drawn in the last frame.
///
/// Filled while rendering and queried when a mouse click arrives, so a click
/// always resolves against what the user actually saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlMap {
    regions: Vec<(Rect, Control)>,
}

impl ControlMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Records `control` at `area`. Empty areas are not clickable and are skipped.
    pub fn register(&mut self, area: Rect, control: Control) {
        if !area.is_empty() {
            self.regions.push((area, control));
        }
    }

    /// The control under the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, control)| *control)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
