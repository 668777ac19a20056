use ratatui::{prelude::*, widgets::StatefulWidget};

use crate::{
    core::state::stopwatch::Control, domain::time::formatted_seconds,
    presentation::config::Styles, presentation::control_map::ControlMap,
};

const DELETE_LABEL: &str = "[x]";

/// One recorded lap: `<index>/ <M:SS> [x]`.
///
/// The `[x]` region is registered in the [`ControlMap`] with the delete
/// control bound to this row.
#[derive(Debug, Clone)]
pub struct LapRow<'a> {
    index: usize,
    seconds: u64,
    on_delete: Control,
    selected: bool,
    styles: &'a Styles,
}

impl<'a> LapRow<'a> {
    pub fn new(index: usize, seconds: u64, on_delete: Control, styles: &'a Styles) -> Self {
        Self {
            index,
            seconds,
            on_delete,
            selected: false,
            styles,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn on_delete(&self) -> Control {
        self.on_delete
    }

    fn prefix(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.index.to_string(), self.styles.style("lap_index")),
            Span::raw("/ "),
            Span::styled(formatted_seconds(self.seconds), self.styles.style("lap_time")),
            Span::raw(" "),
        ])
    }
}

impl StatefulWidget for LapRow<'_> {
    type State = ControlMap;

    fn render(self, area: Rect, buf: &mut Buffer, controls: &mut ControlMap) {
        if area.is_empty() {
            return;
        }
        if self.selected {
            buf.set_style(area, self.styles.style("lap_selected"));
        }

        let mut line = self.prefix();
        let prefix_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        line.push_span(Span::styled(DELETE_LABEL, self.styles.style("lap_delete")));
        line.render(area, buf);

        let delete_area = Rect::new(
            area.x.saturating_add(prefix_width),
            area.y,
            DELETE_LABEL.len() as u16,
            1,
        )
        .intersection(area);
        controls.register(delete_area, self.on_delete);
    }
}
