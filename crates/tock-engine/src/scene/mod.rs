//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands referencing uploaded shapes
//! - keep paint order equal to insertion order (back-to-front)

mod cmd;
mod list;
mod transform;

pub use cmd::{DrawCmd, ShapeCmd};
pub use list::DrawList;
pub use transform::Transform;
