//! Exponentially-smoothed pointer position.
//!
//! One-step exponential moving average, not a physical simulation: the only
//! state is the previous smoothed value. Convergence toward a constant raw
//! input is asymptotic and never overshoots for factors in (0, 1].

use crate::math::Vec2;

#[derive(Debug)]
pub struct MotionSmoother {
    factor: f32,
    smoothed: Option<Vec2>,
}

impl MotionSmoother {
    /// Factor is assumed pre-validated into (0, 1] (see TrailConfig).
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            smoothed: None,
        }
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Advance one tick toward `raw`. The first sample snaps exactly so a
    /// fresh controller does not animate in from the origin.
    #[inline]
    pub fn step(&mut self, raw: Vec2) -> Vec2 {
        let next = match self.smoothed {
            Some(current) => current.lerp(raw, self.factor),
            None => raw,
        };
        self.smoothed = Some(next);
        next
    }

    /// Latest smoothed position, if any sample has been seen.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.smoothed
    }

    #[inline]
    pub fn reset(&mut self) {
        self.smoothed = None;
    }
}
