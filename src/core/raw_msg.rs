use crossterm::event::KeyEvent;

use crate::core::state::stopwatch::Control;

/// Raw messages from external sources (input, system)
/// These need to be translated to domain messages before they reach `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    // A rendered control was activated (mouse click)
    Control(Control),

    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
