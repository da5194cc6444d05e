use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector in normalized local units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Point at `radius` along the direction `angle` (radians, counter-clockwise from +X).
    #[inline]
    pub fn from_polar(angle: f32, radius: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c * radius, s * radius)
    }

    /// Rotates counter-clockwise by `angle` radians about the origin.
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }

    /// Component-wise product.
    #[inline]
    pub fn scaled(self, by: Vec2) -> Self {
        Self::new(self.x * by.x, self.y * by.y)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-6
    }

    #[test]
    fn rotate_quarter_turn_maps_up_to_left() {
        assert!(close(Vec2::new(0.0, 1.0).rotated(FRAC_PI_2), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn negative_rotation_is_clockwise() {
        assert!(close(Vec2::new(0.0, 1.0).rotated(-FRAC_PI_2), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn from_polar_has_requested_length() {
        let p = Vec2::from_polar(1.234, 2.5);
        assert!((p.length() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn scaled_is_component_wise() {
        assert_eq!(Vec2::new(2.0, 3.0).scaled(Vec2::new(0.5, -1.0)), Vec2::new(1.0, -3.0));
    }
}
