use crate::core::state::frame_loop::FrameHandle;

/// Host side of the frame loop: at most one pending frame callback.
///
/// A requested frame fires on the next `Render` event from the terminal. A
/// cancelled or superseded request never fires.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameScheduler {
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `handle` for the next frame, replacing any pending request.
    pub fn request(&mut self, handle: FrameHandle) {
        if let Some(previous) = self.pending.replace(handle) {
            log::debug!("Frame {} superseded by {}", previous.id(), handle.id());
        }
    }

    /// Cancels `handle` if it is the pending request. Returns whether
    /// anything was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Takes the pending request for delivery on this frame.
    pub fn take(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::frame_loop::FrameLoop;

    fn handles<const N: usize>() -> [FrameHandle; N] {
        let mut frame_loop = FrameLoop::new();
        let now = Instant::now();
        std::array::from_fn(|_| frame_loop.arm(now).1)
    }

    #[test]
    fn test_request_then_take_fires_once() {
        let [a] = handles();
        let mut scheduler = FrameScheduler::new();

        scheduler.request(a);
        assert_eq!(scheduler.pending(), Some(a));
        assert_eq!(scheduler.take(), Some(a));
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn test_cancel_only_matches_pending_handle() {
        let [a, b] = handles();
        let mut scheduler = FrameScheduler::new();

        scheduler.request(b);
        assert!(!scheduler.cancel(a));
        assert_eq!(scheduler.pending(), Some(b));
        assert!(scheduler.cancel(b));
        assert_eq!(scheduler.take(), None);
    }

    #[test]
    fn test_request_replaces_pending() {
        let [a, b] = handles();
        let mut scheduler = FrameScheduler::new();

        scheduler.request(a);
        scheduler.request(b);
        assert_eq!(scheduler.take(), Some(b));
    }
}
