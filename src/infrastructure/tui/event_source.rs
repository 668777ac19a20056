use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui;

/// Where the app runner pulls its events from: the terminal itself, or a
/// scripted queue for tests.
pub enum EventSource {
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn test_scripted_source() {
        let mut source = EventSource::test([tui::Event::Render, tui::Event::Quit]);
        assert_eq!(source.next().await, Some(tui::Event::Render));
        assert_eq!(source.next().await, Some(tui::Event::Quit));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_real_source_reads_from_tui() -> Result<()> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(
            TestTui::with_events(10, 2, [tui::Event::Tick])?,
        ));
        let mut source = EventSource::real(tui);
        assert_eq!(source.next().await, Some(tui::Event::Tick));
        assert_eq!(source.next().await, None);
        Ok(())
    }
}
