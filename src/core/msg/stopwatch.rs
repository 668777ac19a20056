use std::time::Instant;

use crate::core::state::frame_loop::FrameHandle;

/// Messages specific to StopwatchState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchMsg {
    Start { now: Instant },
    Stop,
    Lap,
    Reset,
    DeleteLap(usize),

    // Fired by the host once per scheduled frame
    FrameTick { handle: FrameHandle, now: Instant },
}

impl StopwatchMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, StopwatchMsg::FrameTick { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::frame_loop::FrameLoop;

    #[test]
    fn test_stopwatch_msg_frequent_detection() {
        let now = Instant::now();
        let (_, handle) = FrameLoop::new().arm(now);

        assert!(StopwatchMsg::FrameTick { handle, now }.is_frequent());
        assert!(!StopwatchMsg::Start { now }.is_frequent());
        assert!(!StopwatchMsg::Lap.is_frequent());
        assert!(!StopwatchMsg::DeleteLap(0).is_frequent());
    }
}
