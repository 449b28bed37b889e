//! Timeline contracts: tween descriptions, per-tick frames, and the injected
//! provider capability.
//!
//! A `TimelineSpec` is pure data describing a multi-stage animation for one
//! item. The provider turns specs into in-flight timelines and samples them
//! each tick; the shipped implementation is `TweenRuntime`, but the trait is
//! the seam that keeps the controller testable against a fake.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;
use crate::ids::{ItemId, TimelineId};
use crate::math::{lerp_f32, Vec2};
use crate::transform::ItemTransform;

/// The animated property and its endpoint values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TweenTarget {
    Position { from: Vec2, to: Vec2 },
    Scale { from: f32, to: f32 },
    InnerScale { from: f32, to: f32 },
    Rotation { from: f32, to: f32 },
    Opacity { from: f32, to: f32 },
    Blur { from: f32, to: f32 },
    Brightness { from: f32, to: f32 },
    Contrast { from: f32, to: f32 },
}

impl TweenTarget {
    /// Write the value at eased progress k into the transform.
    #[inline]
    fn write(&self, k: f32, out: &mut ItemTransform) {
        match *self {
            TweenTarget::Position { from, to } => out.position = from.lerp(to, k),
            TweenTarget::Scale { from, to } => out.scale = lerp_f32(from, to, k),
            TweenTarget::InnerScale { from, to } => out.inner_scale = lerp_f32(from, to, k),
            TweenTarget::Rotation { from, to } => out.rotation = lerp_f32(from, to, k),
            TweenTarget::Opacity { from, to } => out.opacity = lerp_f32(from, to, k),
            TweenTarget::Blur { from, to } => out.filter.blur = lerp_f32(from, to, k),
            TweenTarget::Brightness { from, to } => out.filter.brightness = lerp_f32(from, to, k),
            TweenTarget::Contrast { from, to } => out.filter.contrast = lerp_f32(from, to, k),
        }
    }
}

/// One tween within a timeline. A tween contributes nothing before its delay
/// elapses and holds its end value afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub target: TweenTarget,
    /// Seconds after timeline start before this tween begins.
    pub delay: f32,
    /// Active duration in seconds.
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    #[inline]
    pub fn new(target: TweenTarget, delay: f32, duration: f32, ease: Ease) -> Self {
        Self {
            target,
            delay,
            duration,
            ease,
        }
    }

    #[inline]
    fn end_time(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }

    /// Sample this tween at `elapsed` seconds since timeline start.
    #[inline]
    pub fn sample_into(&self, elapsed: f32, out: &mut ItemTransform) {
        if elapsed < self.delay {
            return;
        }
        let t = if self.duration > 0.0 {
            ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.target.write(self.ease.apply(t), out);
    }
}

/// A complete multi-stage animation for one item: the transform applied at
/// spawn plus the tweens that carry it through appear/hold/exit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpec {
    pub item: ItemId,
    /// Transform snapped onto the item the instant the timeline starts.
    pub start: ItemTransform,
    pub tweens: Vec<Tween>,
}

impl TimelineSpec {
    /// Total running time: the latest tween end, 0 for an empty spec.
    pub fn duration(&self) -> f32 {
        self.tweens
            .iter()
            .map(Tween::end_time)
            .fold(0.0f32, f32::max)
    }

    /// Sample every active tween at `elapsed`, starting from the spawn state.
    pub fn sample(&self, elapsed: f32) -> ItemTransform {
        let mut out = self.start;
        for tween in &self.tweens {
            tween.sample_into(elapsed, &mut out);
        }
        out
    }
}

/// One sampled state of an in-flight timeline, produced by
/// `TimelineProvider::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub timeline: TimelineId,
    pub item: ItemId,
    pub transform: ItemTransform,
    /// True on the final frame; the timeline self-disposes after it.
    pub finished: bool,
}

/// The injected animation capability: tween/timeline creation, in-flight
/// kills, readiness. Implemented by the shipped `TweenRuntime`; tests use
/// recording fakes.
pub trait TimelineProvider {
    /// False while the underlying capability is still loading; spawns are
    /// silent no-ops until then.
    fn ready(&self) -> bool {
        true
    }

    /// Start a timeline. Any prior timeline on the same item is killed first
    /// (last-spawn-wins). Returns None when not ready.
    fn spawn(&mut self, spec: TimelineSpec) -> Option<TimelineId>;

    /// Kill a specific timeline. Returns whether it was in flight.
    fn kill(&mut self, id: TimelineId) -> bool;

    /// Kill whatever timeline is bound to the item, returning its id.
    fn kill_item(&mut self, item: ItemId) -> Option<TimelineId>;

    /// Kill everything (teardown).
    fn kill_all(&mut self);

    /// The timeline currently bound to an item, if any.
    fn item_timeline(&self, item: ItemId) -> Option<TimelineId>;

    fn active_count(&self) -> usize;

    /// Advance all in-flight timelines by dt seconds, pushing one frame per
    /// timeline. Finished timelines are removed after their final frame.
    fn advance(&mut self, dt: f32, frames: &mut Vec<TimelineFrame>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_is_inert_before_delay_and_clamped_after() {
        let tween = Tween::new(
            TweenTarget::Opacity { from: 1.0, to: 0.0 },
            0.5,
            1.0,
            Ease::Linear,
        );
        let mut t = ItemTransform {
            opacity: 0.7,
            ..Default::default()
        };
        tween.sample_into(0.2, &mut t);
        assert_eq!(t.opacity, 0.7);
        tween.sample_into(1.0, &mut t);
        assert_eq!(t.opacity, 0.5);
        tween.sample_into(9.0, &mut t);
        assert_eq!(t.opacity, 0.0);
    }

    #[test]
    fn spec_duration_is_latest_tween_end() {
        let spec = TimelineSpec {
            item: ItemId(0),
            start: ItemTransform::default(),
            tweens: vec![
                Tween::new(TweenTarget::Opacity { from: 0.0, to: 1.0 }, 0.0, 0.4, Ease::Linear),
                Tween::new(TweenTarget::Opacity { from: 1.0, to: 0.0 }, 0.6, 0.8, Ease::Linear),
            ],
        };
        assert!((spec.duration() - 1.4).abs() < 1e-6);
    }

    #[test]
    fn sample_applies_start_then_active_tweens() {
        let start = ItemTransform {
            rotation: 12.0,
            ..Default::default()
        };
        let spec = TimelineSpec {
            item: ItemId(0),
            start,
            tweens: vec![Tween::new(
                TweenTarget::Rotation { from: 12.0, to: 0.0 },
                0.0,
                1.0,
                Ease::Linear,
            )],
        };
        assert_eq!(spec.sample(0.0).rotation, 12.0);
        assert_eq!(spec.sample(0.5).rotation, 6.0);
        assert_eq!(spec.sample(1.0).rotation, 0.0);
    }
}
