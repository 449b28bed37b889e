//! Easing curves for tween timing.
//!
//! Timing is cubic-bezier with control points (x1, y1, x2, y2): the eased
//! value is found by inverting the x bezier via binary search, then
//! evaluating the y bezier at that parameter. Named presets cover the curves
//! the stock variants use; `Linear` is an exact fast path.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Cubic-bezier timing with control points (x1, y1, x2, y2).
    Bezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Ease {
    pub const OUT_QUAD: Ease = Ease::Bezier {
        x1: 0.5,
        y1: 1.0,
        x2: 0.89,
        y2: 1.0,
    };
    pub const OUT_CUBIC: Ease = Ease::Bezier {
        x1: 0.33,
        y1: 1.0,
        x2: 0.68,
        y2: 1.0,
    };
    pub const OUT_EXPO: Ease = Ease::Bezier {
        x1: 0.16,
        y1: 1.0,
        x2: 0.3,
        y2: 1.0,
    };
    /// Overshoots past 1.0 before settling; used by pop-in style variants.
    pub const OUT_BACK: Ease = Ease::Bezier {
        x1: 0.34,
        y1: 1.56,
        x2: 0.64,
        y2: 1.0,
    };
    pub const IN_OUT_SINE: Ease = Ease::Bezier {
        x1: 0.37,
        y1: 0.0,
        x2: 0.63,
        y2: 1.0,
    };

    /// Map normalized time t in [0,1] to eased progress.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t.clamp(0.0, 1.0),
            Ease::Bezier { x1, y1, x2, y2 } => bezier_ease_t(t, x1, y1, x2, y2),
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_is_identity() {
        assert_eq!(Ease::Linear.apply(0.25), 0.25);
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn bezier_endpoints_are_exact() {
        for ease in [Ease::OUT_QUAD, Ease::OUT_CUBIC, Ease::OUT_EXPO, Ease::IN_OUT_SINE] {
            assert!(ease.apply(0.0).abs() < 1e-4);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        // Ease-out families should be ahead of linear progress mid-curve.
        for ease in [Ease::OUT_QUAD, Ease::OUT_CUBIC, Ease::OUT_EXPO] {
            assert!(ease.apply(0.5) > 0.5);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let mut peak = 0.0f32;
        for i in 0..=100 {
            peak = peak.max(Ease::OUT_BACK.apply(i as f32 / 100.0));
        }
        assert!(peak > 1.0);
    }
}
