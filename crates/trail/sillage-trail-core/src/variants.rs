//! The eight stylistic variants, modeled as one parameter table consumed by
//! the generic sequencer rather than eight parallel pipelines.
//!
//! Parameters are plain serializable data so hosts can inspect or override a
//! look without touching engine code.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::error::TrailError;

/// Stylistic preset selector. The integer mapping (1..=8) is the wire
/// contract hosts use.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TrailVariant {
    /// Fade in along the pointer path, fade out in place.
    Classic,
    /// Pop in from zero scale with a random tilt.
    PopIn,
    /// Spawn over-bright and blurred, resolve to normal.
    Flash,
    /// Inner content de-zooms while the tile settles.
    InnerZoom,
    /// Exit drifts outward along the movement direction.
    Fling,
    /// Pointer speed drives scale, brightness, blur and saturation.
    SpeedScale,
    /// Spawns pre-rotated against the movement's spin and rotates into place.
    RotateIn,
    /// Classic look with a rolling cap on simultaneously visible items.
    RollingWindow,
}

impl TrailVariant {
    pub const ALL: [TrailVariant; 8] = [
        TrailVariant::Classic,
        TrailVariant::PopIn,
        TrailVariant::Flash,
        TrailVariant::InnerZoom,
        TrailVariant::Fling,
        TrailVariant::SpeedScale,
        TrailVariant::RotateIn,
        TrailVariant::RollingWindow,
    ];

    /// Resolve the 1-based wire index.
    pub fn from_index(index: u8) -> Result<Self, TrailError> {
        match index {
            1 => Ok(TrailVariant::Classic),
            2 => Ok(TrailVariant::PopIn),
            3 => Ok(TrailVariant::Flash),
            4 => Ok(TrailVariant::InnerZoom),
            5 => Ok(TrailVariant::Fling),
            6 => Ok(TrailVariant::SpeedScale),
            7 => Ok(TrailVariant::RotateIn),
            8 => Ok(TrailVariant::RollingWindow),
            index => Err(TrailError::InvalidVariant { index }),
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            TrailVariant::Classic => 1,
            TrailVariant::PopIn => 2,
            TrailVariant::Flash => 3,
            TrailVariant::InnerZoom => 4,
            TrailVariant::Fling => 5,
            TrailVariant::SpeedScale => 6,
            TrailVariant::RotateIn => 7,
            TrailVariant::RollingWindow => 8,
        }
    }

    /// The parameter set defining this variant's look.
    pub fn params(self) -> VariantParams {
        match self {
            TrailVariant::Classic => VariantParams {
                smoothing: 0.1,
                appear: AppearParams {
                    duration: 0.45,
                    ease: Ease::OUT_CUBIC,
                    from_scale: 1.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 0.45,
                    duration: 0.8,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.3,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::None,
                visible_cap: None,
            },
            TrailVariant::PopIn => VariantParams {
                smoothing: 0.3,
                appear: AppearParams {
                    duration: 0.5,
                    ease: Ease::OUT_BACK,
                    from_scale: 0.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 0.6,
                    duration: 0.6,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.0,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::Jitter {
                    min_deg: -15.0,
                    max_deg: 15.0,
                },
                visible_cap: None,
            },
            TrailVariant::Flash => VariantParams {
                smoothing: 0.1,
                appear: AppearParams {
                    duration: 0.4,
                    ease: Ease::OUT_EXPO,
                    from_scale: 1.0,
                },
                hold: Some(HoldParams {
                    duration: 0.9,
                    ease: Ease::OUT_QUAD,
                    inner_scale_from: None,
                    brightness_from: Some(2.5),
                    contrast_from: Some(1.6),
                    blur_from: Some(10.0),
                }),
                exit: ExitParams {
                    delay: 0.9,
                    duration: 0.7,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.6,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::None,
                visible_cap: None,
            },
            TrailVariant::InnerZoom => VariantParams {
                smoothing: 0.1,
                appear: AppearParams {
                    duration: 0.6,
                    ease: Ease::OUT_CUBIC,
                    from_scale: 1.0,
                },
                hold: Some(HoldParams {
                    duration: 1.0,
                    ease: Ease::OUT_EXPO,
                    inner_scale_from: Some(1.75),
                    brightness_from: None,
                    contrast_from: None,
                    blur_from: None,
                }),
                exit: ExitParams {
                    delay: 0.8,
                    duration: 0.7,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.85,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::None,
                visible_cap: None,
            },
            TrailVariant::Fling => VariantParams {
                smoothing: 0.3,
                appear: AppearParams {
                    duration: 0.4,
                    ease: Ease::OUT_CUBIC,
                    from_scale: 1.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 0.4,
                    duration: 0.9,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.4,
                    drift: 1.25,
                },
                speed_map: None,
                rotation: RotationMode::None,
                visible_cap: None,
            },
            TrailVariant::SpeedScale => VariantParams {
                smoothing: 0.3,
                appear: AppearParams {
                    duration: 0.45,
                    ease: Ease::OUT_CUBIC,
                    from_scale: 1.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 0.5,
                    duration: 0.7,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.2,
                    drift: 0.0,
                },
                speed_map: Some(SpeedMap {
                    max_speed: 40.0,
                    scale: [0.35, 1.4],
                    brightness: [0.55, 1.25],
                    blur: [5.0, 0.0],
                    grayscale: [1.0, 0.0],
                }),
                rotation: RotationMode::None,
                visible_cap: None,
            },
            TrailVariant::RotateIn => VariantParams {
                smoothing: 0.1,
                appear: AppearParams {
                    duration: 0.55,
                    ease: Ease::OUT_BACK,
                    from_scale: 1.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 0.6,
                    duration: 0.7,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.5,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::Directional { offset_deg: 14.0 },
                visible_cap: None,
            },
            TrailVariant::RollingWindow => VariantParams {
                smoothing: 0.1,
                appear: AppearParams {
                    duration: 0.45,
                    ease: Ease::OUT_CUBIC,
                    from_scale: 1.0,
                },
                hold: None,
                exit: ExitParams {
                    delay: 1.0,
                    duration: 0.8,
                    ease: Ease::OUT_QUAD,
                    end_scale: 0.3,
                    drift: 0.0,
                },
                speed_map: None,
                rotation: RotationMode::None,
                visible_cap: Some(9),
            },
        }
    }
}

/// Appear stage: smoothed position -> raw position over a short duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppearParams {
    pub duration: f32,
    pub ease: Ease,
    /// Starting outer scale (0.0 pops in from nothing).
    pub from_scale: f32,
}

/// Optional secondary tweens overlapping the appear stage. Each `*_from`
/// value resolves to neutral over the hold duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldParams {
    pub duration: f32,
    pub ease: Ease,
    pub inner_scale_from: Option<f32>,
    pub brightness_from: Option<f32>,
    pub contrast_from: Option<f32>,
    pub blur_from: Option<f32>,
}

/// Exit stage: fade and shrink after a delay, with optional outward drift.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExitParams {
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
    /// Final outer scale, relative to the appear target scale.
    pub end_scale: f32,
    /// Positional drift along the movement direction, as a multiple of the
    /// raw-to-smoothed travel distance. 0 fades in place.
    pub drift: f32,
}

/// Linear speed-to-look mapping, clamped at `max_speed` (px per tick).
/// Each pair is [value at rest, value at max speed].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedMap {
    pub max_speed: f32,
    pub scale: [f32; 2],
    pub brightness: [f32; 2],
    pub blur: [f32; 2],
    pub grayscale: [f32; 2],
}

impl SpeedMap {
    /// Normalized speed ratio in [0, 1].
    #[inline]
    pub fn ratio(&self, speed: f32) -> f32 {
        if self.max_speed <= 0.0 {
            return 1.0;
        }
        (speed / self.max_speed).clamp(0.0, 1.0)
    }
}

/// How spawn rotation is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RotationMode {
    /// No rotation.
    None,
    /// Static random tilt within the range, in degrees.
    Jitter { min_deg: f32, max_deg: f32 },
    /// Pre-rotate against the movement's spin by this offset, then rotate
    /// into the resting pose.
    Directional { offset_deg: f32 },
}

/// Full parameter set for one variant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariantParams {
    /// Smoothing factor for the trailing position (0.1 slow, 0.3 snappy).
    pub smoothing: f32,
    pub appear: AppearParams,
    pub hold: Option<HoldParams>,
    pub exit: ExitParams,
    pub speed_map: Option<SpeedMap>,
    pub rotation: RotationMode,
    /// Cap on simultaneously visible items; the oldest is forced out early
    /// when exceeded.
    pub visible_cap: Option<usize>,
}
