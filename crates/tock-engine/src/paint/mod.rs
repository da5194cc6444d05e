//! Paint model: solid colors in linear, premultiplied RGBA.

pub mod color;

pub use color::{srgb_to_linear, Color};
