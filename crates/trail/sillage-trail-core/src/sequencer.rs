//! Builds per-spawn timelines from the variant parameter table.
//!
//! Pure data-in/data-out: given the selected item, the spawn context and a
//! variant's parameters, emit the `TimelineSpec` for its appear/hold/exit
//! stages. All randomness flows through the caller's seeded rng.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::math::{lerp_f32, Vec2};
use crate::pool::PooledItem;
use crate::timeline::{TimelineSpec, Tween, TweenTarget};
use crate::transform::ItemTransform;
use crate::variants::{RotationMode, VariantParams};

/// Rotational direction of the pointer's movement angle, frame over frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Spin {
    None,
    Clockwise,
    CounterClockwise,
}

/// Everything the sequencer needs about the moment of a spawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnContext {
    /// Current raw pointer sample; the appear stage lands here.
    pub raw: Vec2,
    /// Current smoothed position; the appear stage starts here.
    pub smoothed: Vec2,
    /// Raw-to-smoothed travel distance, the per-tick speed measure.
    pub speed: f32,
    /// Normalized raw-minus-smoothed delta; zero when stationary.
    pub direction: Vec2,
    pub spin: Spin,
}

/// Build the full timeline for one spawn.
pub fn build_timeline(
    item: &PooledItem,
    ctx: &SpawnContext,
    params: &VariantParams,
    rng: &mut SmallRng,
) -> TimelineSpec {
    let half = item.size().half_extents();
    let from_pos = ctx.smoothed - half;
    let to_pos = ctx.raw - half;

    let ratio = params.speed_map.map(|m| m.ratio(ctx.speed));
    let target_scale = match (params.speed_map, ratio) {
        (Some(m), Some(r)) => lerp_f32(m.scale[0], m.scale[1], r),
        _ => 1.0,
    };

    let mut start = ItemTransform {
        position: from_pos,
        scale: params.appear.from_scale,
        ..Default::default()
    };
    if let Some(hold) = params.hold {
        if let Some(inner) = hold.inner_scale_from {
            start.inner_scale = inner;
        }
        if let Some(brightness) = hold.brightness_from {
            start.filter.brightness = brightness;
        }
        if let Some(contrast) = hold.contrast_from {
            start.filter.contrast = contrast;
        }
        if let Some(blur) = hold.blur_from {
            start.filter.blur = blur;
        }
    }
    if let (Some(m), Some(r)) = (params.speed_map, ratio) {
        // Constant per spawn: the look of an item is frozen at its birth speed.
        start.filter.brightness = lerp_f32(m.brightness[0], m.brightness[1], r);
        start.filter.blur = lerp_f32(m.blur[0], m.blur[1], r);
        start.filter.grayscale = lerp_f32(m.grayscale[0], m.grayscale[1], r);
    }

    let mut rotation_tween = None;
    match params.rotation {
        RotationMode::None => {}
        RotationMode::Jitter { min_deg, max_deg } => {
            start.rotation = rng.gen_range(min_deg..=max_deg);
        }
        RotationMode::Directional { offset_deg } => {
            let from = match ctx.spin {
                Spin::Clockwise => -offset_deg,
                Spin::CounterClockwise => offset_deg,
                Spin::None => 0.0,
            };
            start.rotation = from;
            if from != 0.0 {
                rotation_tween = Some(Tween::new(
                    TweenTarget::Rotation { from, to: 0.0 },
                    0.0,
                    params.appear.duration,
                    params.appear.ease,
                ));
            }
        }
    }

    let mut tweens = Vec::with_capacity(8);
    tweens.push(Tween::new(
        TweenTarget::Position {
            from: from_pos,
            to: to_pos,
        },
        0.0,
        params.appear.duration,
        params.appear.ease,
    ));
    tweens.push(Tween::new(
        TweenTarget::Opacity { from: 0.0, to: 1.0 },
        0.0,
        params.appear.duration,
        params.appear.ease,
    ));
    if start.scale != target_scale {
        tweens.push(Tween::new(
            TweenTarget::Scale {
                from: start.scale,
                to: target_scale,
            },
            0.0,
            params.appear.duration,
            params.appear.ease,
        ));
    }
    if let Some(tween) = rotation_tween {
        tweens.push(tween);
    }

    if let Some(hold) = params.hold {
        if let Some(inner) = hold.inner_scale_from {
            tweens.push(Tween::new(
                TweenTarget::InnerScale {
                    from: inner,
                    to: 1.0,
                },
                0.0,
                hold.duration,
                hold.ease,
            ));
        }
        if let Some(brightness) = hold.brightness_from {
            tweens.push(Tween::new(
                TweenTarget::Brightness {
                    from: brightness,
                    to: 1.0,
                },
                0.0,
                hold.duration,
                hold.ease,
            ));
        }
        if let Some(contrast) = hold.contrast_from {
            tweens.push(Tween::new(
                TweenTarget::Contrast {
                    from: contrast,
                    to: 1.0,
                },
                0.0,
                hold.duration,
                hold.ease,
            ));
        }
        if let Some(blur) = hold.blur_from {
            tweens.push(Tween::new(
                TweenTarget::Blur {
                    from: blur,
                    to: 0.0,
                },
                0.0,
                hold.duration,
                hold.ease,
            ));
        }
    }

    tweens.push(Tween::new(
        TweenTarget::Opacity { from: 1.0, to: 0.0 },
        params.exit.delay,
        params.exit.duration,
        params.exit.ease,
    ));
    tweens.push(Tween::new(
        TweenTarget::Scale {
            from: target_scale,
            to: target_scale * params.exit.end_scale,
        },
        params.exit.delay,
        params.exit.duration,
        params.exit.ease,
    ));
    if params.exit.drift > 0.0 && ctx.direction != Vec2::ZERO {
        let drift_to = to_pos + ctx.direction * (ctx.speed * params.exit.drift);
        tweens.push(Tween::new(
            TweenTarget::Position {
                from: to_pos,
                to: drift_to,
            },
            params.exit.delay,
            params.exit.duration,
            params.exit.ease,
        ));
    }

    TimelineSpec {
        item: item.id,
        start,
        tweens,
    }
}

/// Short exit used when the rolling visible window evicts its oldest item:
/// pick the item up from its current state and fade it out fast.
pub fn build_early_exit(item: &PooledItem) -> TimelineSpec {
    let current = item.transform;
    TimelineSpec {
        item: item.id,
        start: current,
        tweens: vec![
            Tween::new(
                TweenTarget::Opacity {
                    from: current.opacity,
                    to: 0.0,
                },
                0.0,
                0.25,
                Ease::OUT_QUAD,
            ),
            Tween::new(
                TweenTarget::Scale {
                    from: current.scale,
                    to: current.scale * 0.85,
                },
                0.0,
                0.25,
                Ease::OUT_QUAD,
            ),
        ],
    }
}
