use std::time::{Duration, Instant};

use super::wall::{LocalClock, TimeSource, WallTime};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Wall-clock time sampled at the tick; the dial is driven by this.
    pub wall: WallTime,
}

/// Per-loop clock producing `FrameTime` snapshots.
///
/// Each tick samples the wall clock once so that every hand of a frame is
/// computed from the same instant. Delta time is clamped to keep it sane after
/// stalls (debugger, minimized window).
#[derive(Debug)]
pub struct FrameClock {
    source: Box<dyn TimeSource>,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clock backed by host local time with default clamps.
    pub fn new() -> Self {
        Self::with_source(LocalClock)
    }

    /// Clock backed by an arbitrary time source.
    pub fn with_source(source: impl TimeSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Replaces the delta-time clamps.
    pub fn with_clamps(mut self, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        self.dt_min = dt_min;
        self.dt_max = dt_max;
        self
    }

    /// Resets the delta-time baseline, e.g. after the surface was reconfigured.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
            wall: self.source.now(),
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
