/// Frame scheduling.
///
/// [`Ticker`] stands in for a "request the next frame" callback chain: a
/// tick only runs if one was requested, and a tick that wants a successor
/// requests it explicitly.  Stopping is simply not requesting.
/// [`FramePacer`] is the host side: it holds the loop to a fixed frame rate.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Ticker {
    requested: bool,
    ticks: u64,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for one more tick.  Repeated requests before the tick runs
    /// collapse into one.
    pub fn request(&mut self) {
        self.requested = true;
    }

    pub fn cancel(&mut self) {
        self.requested = false;
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consume the pending request.  Returns `true` if a tick is due now.
    pub fn take(&mut self) -> bool {
        let due = std::mem::take(&mut self.requested);
        if due {
            self.ticks += 1;
        }
        due
    }

    /// Number of requests consumed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    period: Duration,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        FramePacer { period }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time still to wait for a frame that began at `frame_start`.
    pub fn remaining(&self, frame_start: Instant) -> Duration {
        self.period.saturating_sub(frame_start.elapsed())
    }

    /// Sleep out the rest of the frame.
    pub fn wait(&self, frame_start: Instant) {
        let remaining = self.remaining(frame_start);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
