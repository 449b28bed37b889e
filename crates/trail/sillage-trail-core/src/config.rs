//! Core configuration for sillage-trail-core.

use serde::{Deserialize, Serialize};

use crate::error::TrailError;

/// Controller-level knobs. Variant parameter tables own the per-look tuning;
/// this struct carries the pipeline constants and host policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Pointer travel (px) required between spawns.
    pub gate_threshold: f32,
    /// Override for the variant's smoothing factor, in (0, 1].
    pub smoothing: Option<f32>,
    /// Base z-order value; the counter returns here between bursts.
    pub z_base: u32,
    /// Override for the variant's simultaneously-visible cap.
    pub visible_cap: Option<usize>,
    /// Seed for tilt jitter; fixed so runs are reproducible.
    pub rng_seed: u64,
    /// Host platform policy (e.g. mobile/Safari disablement). When false the
    /// controller stays inert after `start`.
    pub enabled: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            gate_threshold: 80.0,
            smoothing: None,
            z_base: 100,
            visible_cap: None,
            rng_seed: 0x51_11_A6_E5,
            enabled: true,
        }
    }
}

impl TrailConfig {
    /// Validate basic invariants before the controller accepts the config.
    pub fn validate(&self) -> Result<(), TrailError> {
        if !self.gate_threshold.is_finite() || self.gate_threshold <= 0.0 {
            return Err(TrailError::InvalidConfig {
                reason: format!("gate_threshold must be positive, got {}", self.gate_threshold),
            });
        }
        if let Some(factor) = self.smoothing {
            if !factor.is_finite() || factor <= 0.0 || factor > 1.0 {
                return Err(TrailError::InvalidConfig {
                    reason: format!("smoothing must be in (0, 1], got {factor}"),
                });
            }
        }
        if let Some(cap) = self.visible_cap {
            if cap == 0 {
                return Err(TrailError::InvalidConfig {
                    reason: "visible_cap must be at least 1".into(),
                });
            }
        }
        Ok(())
    }
}
