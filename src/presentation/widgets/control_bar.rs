use ratatui::{prelude::*, widgets::StatefulWidget};

use crate::{
    core::state::stopwatch::Control,
    presentation::{
        config::{keybindings::Action, KeyBindings, Styles},
        control_map::ControlMap,
    },
};

const GAP: u16 = 1;

/// A row of clickable buttons, one per offered stopwatch control.
pub struct ControlBar<'a> {
    controls: Vec<Control>,
    keybindings: &'a KeyBindings,
    styles: &'a Styles,
}

impl<'a> ControlBar<'a> {
    pub fn new(controls: Vec<Control>, keybindings: &'a KeyBindings, styles: &'a Styles) -> Self {
        Self {
            controls,
            keybindings,
            styles,
        }
    }

    fn label(control: Control) -> Option<(&'static str, Action)> {
        match control {
            Control::Start => Some(("start", Action::Start)),
            Control::Stop => Some(("stop", Action::Stop)),
            Control::Lap => Some(("lap", Action::Lap)),
            Control::Reset => Some(("reset", Action::Reset)),
            Control::DeleteLap(_) => None,
        }
    }

    fn button(&self, control: Control) -> Option<Line<'static>> {
        let (name, action) = Self::label(control)?;
        let mut spans = vec![Span::styled(format!(" {name} "), self.styles.style("control"))];
        if let Some(key) = self.keybindings.keys_for(action).first() {
            spans.push(Span::styled(
                format!("({key}) "),
                self.styles.style("control").patch(self.styles.style("control_key")),
            ));
        }
        Some(Line::from(spans))
    }
}

impl StatefulWidget for ControlBar<'_> {
    type State = ControlMap;

    fn render(self, area: Rect, buf: &mut Buffer, controls: &mut ControlMap) {
        let mut x = area.x;
        for control in &self.controls {
            let Some(button) = self.button(*control) else {
                continue;
            };
            let width = u16::try_from(button.width()).unwrap_or(u16::MAX);
            let button_area = Rect::new(x, area.y, width, area.height.min(1)).intersection(area);
            if button_area.is_empty() {
                break;
            }
            button.render(button_area, buf);
            controls.register(button_area, *control);
            x = x.saturating_add(width).saturating_add(GAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn keybindings() -> KeyBindings {
        let key = |c| vec![KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)];
        KeyBindings(HashMap::from([
            (key('s'), Action::Start),
            (key('r'), Action::Reset),
        ]))
    }

    #[test]
    fn test_render_buttons_and_regions() {
        let keybindings = keybindings();
        let styles = Styles::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let mut controls = ControlMap::new();

        ControlBar::new(vec![Control::Start, Control::Reset], &keybindings, &styles).render(
            area,
            &mut buf,
            &mut controls,
        );

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert_eq!(content.trim_end(), " start (s)   reset (r)");
        assert_eq!(controls.len(), 2);
        assert_eq!(controls.hit(0, 0), Some(Control::Start));
        assert_eq!(controls.hit(10, 0), Some(Control::Start));
        assert_eq!(controls.hit(11, 0), None);
        assert_eq!(controls.hit(12, 0), Some(Control::Reset));
        assert_eq!(controls.hit(22, 0), Some(Control::Reset));
        assert_eq!(controls.hit(23, 0), None);
    }

    #[test]
    fn test_unbound_control_has_no_key_hint() {
        let keybindings = KeyBindings::default();
        let styles = Styles::default();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        let mut controls = ControlMap::new();

        ControlBar::new(vec![Control::Lap], &keybindings, &styles).render(
            area,
            &mut buf,
            &mut controls,
        );

        assert_eq!(controls.hit(4, 0), Some(Control::Lap));
        assert_eq!(controls.hit(5, 0), None);
    }

    #[test]
    fn test_overflowing_buttons_are_dropped() {
        let keybindings = KeyBindings::default();
        let styles = Styles::default();
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        let mut controls = ControlMap::new();

        ControlBar::new(vec![Control::Stop, Control::Lap], &keybindings, &styles).render(
            area,
            &mut buf,
            &mut controls,
        );

        assert_eq!(controls.hit(0, 0), Some(Control::Stop));
        assert_eq!(controls.hit(7, 0), Some(Control::Lap));
        assert_eq!(controls.len(), 2);
    }
}
