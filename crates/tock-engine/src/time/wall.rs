use std::fmt;

use chrono::Timelike;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Local time of day, decomposed the way the dial consumes it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct WallTime {
    /// `0..24`
    pub hour: u32,
    /// `0..60`
    pub minute: u32,
    /// `0..60`
    pub second: u32,
    /// `0..1_000_000_000`
    pub nanosecond: u32,
}

impl WallTime {
    /// # Panics
    /// Panics if a field is out of range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        assert!(hour < 24, "hour must be in 0..24, got {hour}");
        assert!(minute < 60, "minute must be in 0..60, got {minute}");
        assert!(second < 60, "second must be in 0..60, got {second}");
        Self { hour, minute, second, nanosecond: 0 }
    }

    /// # Panics
    /// Panics if `nanosecond` is a full second or more.
    pub fn with_nanosecond(self, nanosecond: u32) -> Self {
        assert!(nanosecond < NANOS_PER_SECOND, "nanosecond must be < 1e9, got {nanosecond}");
        Self { nanosecond, ..self }
    }

    /// Decomposes any chrono time. A leap second (nanosecond >= 1e9) is held
    /// at the end of the current second.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            nanosecond: t.nanosecond().min(NANOS_PER_SECOND - 1),
        }
    }

    /// Seconds within the minute including the sub-second part, in `[0, 60)`.
    #[inline]
    pub fn fractional_second(self) -> f64 {
        f64::from(self.second) + f64::from(self.nanosecond) / f64::from(NANOS_PER_SECOND)
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of the current wall-clock time.
pub trait TimeSource: fmt::Debug {
    fn now(&self) -> WallTime;
}

/// Host local time (respects the system time zone).
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallTime {
        WallTime::from_timelike(&chrono::Local::now())
    }
}

/// Always reports the same time. Useful for tests and screenshots.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FixedClock(pub WallTime);

impl TimeSource for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}
