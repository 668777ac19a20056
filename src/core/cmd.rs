use serde::{Deserialize, Serialize};

use crate::core::state::frame_loop::FrameHandle;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Side effects requested by the update function and carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Fire `FrameTick` with this handle on the next rendered frame.
    RequestFrame(FrameHandle),
    /// Drop the pending frame for this handle, if it is still pending.
    CancelFrame(FrameHandle),
    Tui(TuiCommand),
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::core::state::frame_loop::FrameLoop;

    #[test]
    fn test_frame_commands_compare_by_handle() {
        let mut frame_loop = FrameLoop::new();
        let (_, first) = frame_loop.arm(Instant::now());
        let (_, second) = frame_loop.arm(Instant::now());

        assert_eq!(Cmd::RequestFrame(first), Cmd::RequestFrame(first));
        assert_ne!(Cmd::RequestFrame(first), Cmd::RequestFrame(second));
        assert_ne!(Cmd::RequestFrame(first), Cmd::CancelFrame(first));
    }

    #[test]
    fn test_tui_command_serialization() {
        let cmd = TuiCommand::Resize {
            width: 100,
            height: 50,
        };
        let serialized = serde_json::to_string(&cmd).expect("serialize");
        let deserialized: TuiCommand = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(cmd, deserialized);
    }
}
