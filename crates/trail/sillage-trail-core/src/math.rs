//! 2D vector and size primitives shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Container-local 2D coordinate or delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or zero when the length is
    /// (numerically) zero.
    #[inline]
    pub fn normalize_or_zero(self) -> Vec2 {
        let len = self.length();
        if len > f32::EPSILON {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Linear interpolation of both components.
    #[inline]
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2::new(lerp_f32(self.x, other.x, t), lerp_f32(self.y, other.y, t))
    }

    /// Movement angle in radians, measured with y pointing down (screen space).
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
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

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Measured bounding box of a pooled item, captured at mount and on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half extents, used to center an item on a point. Unmeasured (zero or
    /// non-finite) dimensions degrade to zero so the item lands exactly on
    /// the pointer.
    #[inline]
    pub fn half_extents(self) -> Vec2 {
        let w = if self.width.is_finite() { self.width.max(0.0) } else { 0.0 };
        let h = if self.height.is_finite() { self.height.max(0.0) } else { 0.0 };
        Vec2::new(w * 0.5, h * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
        let unit = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unmeasured_size_has_zero_half_extents() {
        assert_eq!(Size::default().half_extents(), Vec2::ZERO);
        assert_eq!(Size::new(f32::NAN, 10.0).half_extents().x, 0.0);
        assert_eq!(Size::new(160.0, 200.0).half_extents(), Vec2::new(80.0, 100.0));
    }
}
