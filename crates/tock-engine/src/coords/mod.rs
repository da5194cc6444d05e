//! Coordinate types shared by the geometry generators and the renderer.
//!
//! Canonical local space:
//! - shapes are authored around the origin in normalized units
//! - +X right, +Y up (12 o'clock)
//!
//! The renderer maps local space to NDC and letterboxes it to a square using
//! the viewport.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
