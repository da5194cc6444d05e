//! The clock face catalogue.
//!
//! [`ClockFace::build`] generates every shape once; [`ClockFace::record`]
//! turns a frame's [`ClockAngles`](crate::clock::ClockAngles) into a draw list with fixed per-shape
//! color, scale and translation.

mod catalogue;
mod style;

pub use catalogue::{ClockFace, ShapeId};
pub use style::{DialStyle, FaceStyle, Palette, RingStyle, TickStyle};
