//! Distance gate: converts the continuous pointer stream into a discrete,
//! density-controlled spawn stream. Density is purely a function of cursor
//! travel, never of elapsed time.

use crate::math::Vec2;

#[derive(Debug)]
pub struct DistanceGate {
    threshold: f32,
    last_spawn: Option<Vec2>,
}

impl DistanceGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last_spawn: None,
        }
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Check the current raw sample against the sample recorded at the last
    /// spawn. Fires (and re-baselines) once travel reaches the threshold.
    /// The first sample only sets the baseline.
    #[inline]
    pub fn check(&mut self, raw: Vec2) -> bool {
        match self.last_spawn {
            None => {
                self.last_spawn = Some(raw);
                false
            }
            Some(base) => {
                if base.distance(raw) >= self.threshold {
                    self.last_spawn = Some(raw);
                    true
                } else {
                    false
                }
            }
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.last_spawn = None;
    }
}
