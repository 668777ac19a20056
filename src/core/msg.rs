pub mod stopwatch;
pub mod system;
pub mod ui;

use stopwatch::StopwatchMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    System(SystemMsg),
    Stopwatch(StopwatchMsg),
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Stopwatch(msg) => msg.is_frequent(),
            Msg::System(_) | Msg::Ui(_) => false,
        }
    }
}
