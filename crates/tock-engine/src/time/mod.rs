//! Time subsystem.
//!
//! - `TimeSource` abstracts the wall clock (`LocalClock` for the host,
//!   `FixedClock` for tests)
//! - one `FrameClock` per render loop; call `tick()` once per presented frame

mod frame_clock;
mod wall;

pub use frame_clock::{FrameClock, FrameTime};
pub use wall::{FixedClock, LocalClock, TimeSource, WallTime};
