use ratatui::{
    prelude::*,
    widgets::{Block, Borders, StatefulWidget},
};

use crate::{
    core::state::stopwatch::Control,
    presentation::{config::Styles, control_map::ControlMap, widgets::lap_row::LapRow},
};

/// The recorded laps, one [`LapRow`] per entry, numbered 1..N by position.
///
/// `on_delete` turns a lap position into the delete control bound to that
/// row. An empty sequence renders nothing at all.
pub struct LapList<'a, F>
where
    F: Fn(usize) -> Control,
{
    laps: &'a [u64],
    on_delete: F,
    selected: Option<usize>,
    styles: &'a Styles,
}

impl<'a, F> LapList<'a, F>
where
    F: Fn(usize) -> Control,
{
    pub fn new(laps: &'a [u64], on_delete: F, styles: &'a Styles) -> Self {
        Self {
            laps,
            on_delete,
            selected: None,
            styles,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Rows in sequence order, each bound to its current position.
    pub fn rows(&self) -> impl Iterator<Item = LapRow<'a>> + '_ {
        self.laps.iter().enumerate().map(move |(position, seconds)| {
            LapRow::new(position + 1, *seconds, (self.on_delete)(position), self.styles)
                .selected(self.selected == Some(position))
        })
    }

    // First row to draw so the selection stays visible
    fn offset(&self, visible: usize) -> usize {
        match self.selected {
            Some(i) if i < self.laps.len() && i >= visible => i + 1 - visible,
            _ => 0,
        }
    }
}

impl<F> StatefulWidget for LapList<'_, F>
where
    F: Fn(usize) -> Control,
{
    type State = ControlMap;

    fn render(self, area: Rect, buf: &mut Buffer, controls: &mut ControlMap) {
        if self.laps.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .title(format!(" laps ({}) ", self.laps.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        let offset = self.offset(visible);
        for (line, row) in self.rows().skip(offset).take(visible).enumerate() {
            let row_area = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
            row.render(row_area, buf, controls);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render<F>(list: LapList<'_, F>, area: Rect) -> (Buffer, ControlMap)
    where
        F: Fn(usize) -> Control,
    {
        let mut buf = Buffer::empty(area);
        let mut controls = ControlMap::new();
        list.render(area, &mut buf, &mut controls);
        (buf, controls)
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let styles = Styles::default();
        let area = Rect::new(0, 0, 30, 5);
        let (buf, controls) = render(LapList::new(&[], Control::DeleteLap, &styles), area);

        assert_eq!(buf, Buffer::empty(area));
        assert!(controls.is_empty());
    }

    #[test]
    fn test_rows_are_numbered_by_position() {
        let styles = Styles::default();
        let laps = [5, 5, 61];
        let list = LapList::new(&laps, Control::DeleteLap, &styles);

        let rows: Vec<(usize, Control)> = list
            .rows()
            .map(|row| (row.index(), row.on_delete()))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, Control::DeleteLap(0)),
                (2, Control::DeleteLap(1)),
                (3, Control::DeleteLap(2)),
            ]
        );
    }

    #[test]
    fn test_render_rows() {
        let styles = Styles::default();
        let laps = [5, 61];
        let area = Rect::new(0, 0, 30, 4);
        let (buf, controls) = render(LapList::new(&laps, Control::DeleteLap, &styles), area);

        assert!(line(&buf, 0).contains("laps (2)"));
        assert_eq!(line(&buf, 1), "1/ 0:05 [x]");
        assert_eq!(line(&buf, 2), "2/ 1:01 [x]");
        assert_eq!(line(&buf, 3), "");

        assert_eq!(controls.hit(8, 1), Some(Control::DeleteLap(0)));
        assert_eq!(controls.hit(8, 2), Some(Control::DeleteLap(1)));
    }

    #[test]
    fn test_render_scrolls_to_selection() {
        let styles = Styles::default();
        let laps: Vec<u64> = (0..10).collect();
        let area = Rect::new(0, 0, 30, 4);
        let list = LapList::new(&laps, Control::DeleteLap, &styles).selected(Some(9));
        let (buf, controls) = render(list, area);

        // 3 visible rows: laps 8, 9 and 10
        assert_eq!(line(&buf, 1), "8/ 0:07 [x]");
        assert_eq!(line(&buf, 3), "10/ 0:09 [x]");
        assert_eq!(controls.len(), 3);
        assert_eq!(controls.hit(9, 3), Some(Control::DeleteLap(9)));
    }
}
