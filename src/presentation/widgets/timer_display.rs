use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::{core::state::stopwatch::Phase, domain::time::formatted_seconds};

/// The elapsed time, centered in a bordered box titled with the current phase.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerDisplay {
    seconds: u64,
    phase: Phase,
    style: Style,
}

impl TimerDisplay {
    pub fn new(seconds: u64, phase: Phase) -> Self {
        Self {
            seconds,
            phase,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => " idle ",
            Phase::Paused => " paused ",
            Phase::Running => " running ",
        }
    }
}

impl Widget for TimerDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(self.phase_label());
        Paragraph::new(formatted_seconds(self.seconds))
            .style(self.style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
