use std::time::{Duration, Instant};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Opaque identifier of a scheduled frame callback.
///
/// Handles are never reused, so a tick carrying a handle from a cancelled loop
/// can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Bookkeeping for the redraw-driven timing loop.
///
/// Owned exclusively by the stopwatch state and only mutated through
/// [`FrameLoop::arm`], [`FrameLoop::cancel`], [`FrameLoop::clear`] and
/// [`FrameLoop::advance`].
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    active: Option<FrameHandle>,
    baseline: Option<Instant>,
    next_id: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a new loop with `now` as the baseline.
    ///
    /// Returns the handle that was cancelled (if any) and the freshly armed one.
    pub fn arm(&mut self, now: Instant) -> (Option<FrameHandle>, FrameHandle) {
        let cancelled = self.active.take();
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active = Some(handle);
        self.baseline = Some(now);
        (cancelled, handle)
    }

    /// Deactivates the loop and returns the handle that was active.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.active.take()
    }

    /// Deactivates the loop and forgets the baseline.
    pub fn clear(&mut self) -> Option<FrameHandle> {
        self.baseline = None;
        self.cancel()
    }

    pub fn active(&self) -> Option<FrameHandle> {
        self.active
    }

    pub fn baseline(&self) -> Option<Instant> {
        self.baseline
    }

    /// Accounts for a frame fired at `now`.
    ///
    /// Returns `None` when `handle` is not the active loop. Otherwise returns
    /// the number of whole seconds that elapsed since the baseline (possibly 0)
    /// and moves the baseline forward by exactly that many seconds, so the
    /// sub-second remainder carries over to the next frame.
    ///
    /// The baseline is deliberately not reset to `now`: carrying the remainder
    /// keeps the total independent of how often frames arrive.
    pub fn advance(&mut self, handle: FrameHandle, now: Instant) -> Option<u64> {
        if self.active != Some(handle) {
            return None;
        }
        let baseline = *self.baseline.get_or_insert(now);
        let delta = now.saturating_duration_since(baseline);
        if delta < ONE_SECOND {
            return Some(0);
        }

        let seconds = delta.as_secs();
        self.baseline = Some(baseline + Duration::from_secs(seconds));
        Some(seconds)
    }
}
