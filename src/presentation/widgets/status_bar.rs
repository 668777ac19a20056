use ratatui::{prelude::*, widgets::Paragraph};

/// A single line showing the latest status message, or a hint when there is
/// none.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hint: String,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hint: impl Into<String>) -> Self {
        Self {
            message,
            hint: hint.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        self.message.unwrap_or(&self.hint)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text().to_string())
            .style(self.style)
            .render(area, buf);
    }
}
