use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{
    core::state::{stopwatch::Control, AppState},
    infrastructure::tui,
    presentation::components::Components,
};

/// Draws the component tree and remembers where the last frame put each
/// clickable control.
#[derive(Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }

    /// The control drawn at a screen cell by the last render.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.components.control_at(column, row)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn renderer_renders_with_test_tui() -> Result<()> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(TestTui::new(40, 12)?));
        let mut r = Renderer::new();
        assert_eq!(r.control_at(1, 3), None);

        r.render(&tui, &AppState::new(0)).await?;

        // Idle: only the start button, on the row below the timer box
        assert_eq!(r.control_at(1, 3), Some(Control::Start));
        Ok(())
    }
}
