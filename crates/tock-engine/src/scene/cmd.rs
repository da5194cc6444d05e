use crate::face::ShapeId;
use crate::paint::Color;

use super::{DrawList, Transform};

/// Draw payload for one uploaded shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeCmd {
    pub shape: ShapeId,
    pub transform: Transform,
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a variant here
/// - add a push helper on `DrawList`
/// - teach `render::MeshRenderer` (or a new renderer) to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Shape(ShapeCmd),
}

impl DrawList {
    /// Records a shape draw.
    #[inline]
    pub fn push_shape(&mut self, shape: ShapeId, transform: Transform, color: Color) {
        self.push(DrawCmd::Shape(ShapeCmd { shape, transform, color }));
    }
}
