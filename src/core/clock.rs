//! Frame clock: measures the time between frames and caps the frame rate.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Finish the current frame. Blocks until at least `1 / target_fps`
    /// has passed since the previous call and returns the full frame time.
    fn tick(&mut self, target_fps: u32) -> Duration;

    /// Duration of the previous frame, zero before the first tick.
    fn last_frame(&self) -> Duration;
}

/// Wall-clock implementation that sleeps to hold the target frame rate.
pub struct FrameClock {
    last_tick: Instant,
    last_frame: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            last_frame: Duration::ZERO,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Time budget of a single frame at `target_fps`. Zero means uncapped.
pub fn frame_budget(target_fps: u32) -> Duration {
    if target_fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs(1) / target_fps
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let budget = frame_budget(target_fps);
        let busy = self.last_tick.elapsed();
        if busy < budget {
            std::thread::sleep(budget - busy);
        }
        let now = Instant::now();
        self.last_frame = now - self.last_tick;
        self.last_tick = now;
        self.last_frame
    }

    fn last_frame(&self) -> Duration {
        self.last_frame
    }
}

/// Deterministic clock that reports a constant frame time without sleeping.
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: Duration,
    last_frame: Duration,
    ticks: u64,
}

impl FixedClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            last_frame: Duration::ZERO,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for FixedClock {
    fn tick(&mut self, _target_fps: u32) -> Duration {
        self.ticks += 1;
        self.last_frame = self.step;
        self.step
    }

    fn last_frame(&self) -> Duration {
        self.last_frame
    }
}
