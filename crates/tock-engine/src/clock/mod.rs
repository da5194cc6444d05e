//! Clock-angle mapper.
//!
//! Converts a [`WallTime`](crate::time::WallTime) into hand angles under one fixed convention:
//! a dial fraction of `0` points to 12 o'clock (`π/2`, straight up) and
//! growing fractions turn clockwise, i.e. toward smaller mathematical angles.
//!
//! Everything here is a pure function of its input; nothing is retained
//! between frames.

mod angles;

pub use angles::{
    angle, hand_rotation, numeral_angle, ClockAngles, DialPosition, SecondsMode,
};
