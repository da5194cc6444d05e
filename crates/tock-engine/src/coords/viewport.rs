use super::Vec2;

/// Drawable size in physical pixels.
///
/// The clock face is authored in a square `[-1, 1]` space; `fit_scale` is the
/// per-axis factor that letterboxes that square into the viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// NDC scale that keeps a unit square square.
    ///
    /// The shorter side maps to the full `[-1, 1]` range; the longer side is
    /// shrunk by the aspect ratio. Invalid viewports map to identity.
    pub fn fit_scale(self) -> Vec2 {
        if !self.is_valid() {
            return Vec2::splat(1.0);
        }
        let side = self.width.min(self.height);
        Vec2::new(side / self.width, side / self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_viewport_is_identity() {
        assert_eq!(Viewport::new(800.0, 800.0).fit_scale(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn wide_viewport_shrinks_x() {
        let s = Viewport::new(1600.0, 800.0).fit_scale();
        assert_eq!(s, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn tall_viewport_shrinks_y() {
        let s = Viewport::new(400.0, 800.0).fit_scale();
        assert_eq!(s, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn zero_size_falls_back_to_identity() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert_eq!(Viewport::new(0.0, 600.0).fit_scale(), Vec2::splat(1.0));
    }
}
