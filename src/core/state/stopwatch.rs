use crate::core::{
    cmd::Cmd,
    msg::stopwatch::StopwatchMsg,
    state::frame_loop::{FrameHandle, FrameLoop},
};

/// User-visible phase of the stopwatch, derived from the running flag and the
/// elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Paused,
    Running,
}

/// A user-facing control. `DeleteLap` is bound to a lap position when the lap
/// list is rendered and re-validated when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start,
    Stop,
    Lap,
    Reset,
    DeleteLap(usize),
}

/// Which of the stopwatch controls are currently offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub start: bool,
    pub reset: bool,
    pub stop: bool,
    pub lap: bool,
}

impl Controls {
    pub fn offers(&self, control: Control) -> bool {
        match control {
            Control::Start => self.start,
            Control::Reset => self.reset,
            Control::Stop => self.stop,
            Control::Lap => self.lap,
            Control::DeleteLap(_) => true,
        }
    }

    /// Offered controls in display order.
    pub fn visible(&self) -> Vec<Control> {
        [
            (self.start, Control::Start),
            (self.reset, Control::Reset),
            (self.stop, Control::Stop),
            (self.lap, Control::Lap),
        ]
        .into_iter()
        .filter_map(|(offered, control)| offered.then_some(control))
        .collect()
    }
}

/// Stopwatch state: running flag, elapsed seconds, recorded laps and the
/// frame loop that advances the elapsed time.
#[derive(Debug, Clone)]
pub struct StopwatchState {
    running: bool,
    elapsed_seconds: u64,
    laps: Vec<u64>,
    frame_loop: FrameLoop,
}

impl StopwatchState {
    /// Seeds the elapsed time with the magnitude of `initial_seconds`.
    pub fn new(initial_seconds: i64) -> Self {
        Self {
            running: false,
            elapsed_seconds: initial_seconds.unsigned_abs(),
            laps: Vec::new(),
            frame_loop: FrameLoop::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Handle of the frame loop currently driving the stopwatch, if any.
    pub fn active_frame(&self) -> Option<FrameHandle> {
        self.frame_loop.active()
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.elapsed_seconds) {
            (true, _) => Phase::Running,
            (false, 0) => Phase::Idle,
            (false, _) => Phase::Paused,
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            start: !self.running,
            reset: !self.running && self.elapsed_seconds > 0,
            stop: self.running,
            lap: self.running,
        }
    }

    /// Stopwatch-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: StopwatchMsg) -> Vec<Cmd> {
        match msg {
            StopwatchMsg::Start { now } => {
                let (cancelled, handle) = self.frame_loop.arm(now);
                self.running = true;
                cancelled
                    .map(Cmd::CancelFrame)
                    .into_iter()
                    .chain([Cmd::RequestFrame(handle)])
                    .collect()
            }

            StopwatchMsg::Stop => {
                self.running = false;
                self.frame_loop.cancel().map(Cmd::CancelFrame).into_iter().collect()
            }

            StopwatchMsg::Lap => {
                if self.running {
                    self.laps.push(self.elapsed_seconds);
                }
                vec![]
            }

            StopwatchMsg::Reset => {
                self.running = false;
                self.elapsed_seconds = 0;
                self.laps.clear();
                self.frame_loop.clear().map(Cmd::CancelFrame).into_iter().collect()
            }

            StopwatchMsg::DeleteLap(index) => {
                if index < self.laps.len() {
                    self.laps.remove(index);
                } else {
                    log::debug!(
                        "Ignoring delete of lap {index}: only {} laps recorded",
                        self.laps.len()
                    );
                }
                vec![]
            }

            StopwatchMsg::FrameTick { handle, now } => match self.frame_loop.advance(handle, now) {
                Some(seconds) => {
                    self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
                    vec![Cmd::RequestFrame(handle)]
                }
                None => vec![],
            },
        }
    }
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new(0)
    }
}
