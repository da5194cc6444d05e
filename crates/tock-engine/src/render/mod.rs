//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in the clock's normalized space (center origin, +Y up).
//! - The vertex shader applies the per-draw transform, then letterboxes the
//!   unit square into the viewport with a uniform.

mod common;
mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{MeshRenderer, MeshTopology};
