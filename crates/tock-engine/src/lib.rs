//! Procedural analog clock engine.
//!
//! The geometry and clock-angle layers are pure and GPU-free; `render`,
//! `device` and `window` are the wgpu/winit plumbing that puts them on screen.

pub mod clock;
pub mod coords;
pub mod face;
pub mod geometry;
pub mod paint;
pub mod scene;
pub mod time;

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod window;
