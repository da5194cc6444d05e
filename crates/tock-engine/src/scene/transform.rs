use crate::coords::Vec2;

/// Per-draw placement of a shape: rotate about the local origin, then scale,
/// then translate. The shape vertex shader applies the same order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Radians, counter-clockwise.
    pub rotation: f32,
    pub scale: Vec2,
    pub translate: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotation: 0.0,
        scale: Vec2::splat(1.0),
        translate: Vec2::zero(),
    };

    #[inline]
    pub fn rotated(rotation: f32) -> Self {
        Self { rotation, ..Self::IDENTITY }
    }

    #[inline]
    pub fn uniform(scale: f32) -> Self {
        Self { scale: Vec2::splat(scale), ..Self::IDENTITY }
    }

    #[inline]
    pub fn with_translate(self, translate: Vec2) -> Self {
        Self { translate, ..self }
    }

    /// Maps a local-space point the way the GPU will.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p.rotated(self.rotation).scaled(self.scale) + self.translate
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_is_a_no_op() {
        let p = Vec2::new(0.3, -0.7);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn rotation_happens_before_non_uniform_scale() {
        let t = Transform {
            rotation: FRAC_PI_2,
            scale: Vec2::new(2.0, 1.0),
            translate: Vec2::new(0.0, 0.5),
        };
        // (1, 0) -> rotate -> (0, 1) -> scale -> (0, 1) -> translate -> (0, 1.5)
        let out = t.apply(Vec2::new(1.0, 0.0));
        assert!((out - Vec2::new(0.0, 1.5)).length() < 1e-6);
    }

    #[test]
    fn uniform_scale_then_translate() {
        let t = Transform::uniform(0.1).with_translate(Vec2::new(0.73, 0.0));
        let out = t.apply(Vec2::new(1.0, 1.0));
        assert!((out - Vec2::new(0.83, 0.1)).length() < 1e-6);
    }
}
