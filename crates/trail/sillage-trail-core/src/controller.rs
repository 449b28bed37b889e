//! Trail controller: ownership of the whole pipeline and the public API.
//!
//! Per tick: smooth the pointer, check the distance gate, spawn through the
//! sequencer, advance the provider's timelines, emit Outputs. Lifecycle is
//! Uninitialized -> AwaitingFirstMove -> Running -> Destroyed; nothing
//! animates before the first pointer movement.

use std::collections::VecDeque;
use std::f32::consts::PI;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::TrailConfig;
use crate::error::TrailError;
use crate::gate::DistanceGate;
use crate::ids::ItemId;
use crate::math::{Size, Vec2};
use crate::outputs::{Change, Outputs, TrailEvent};
use crate::pointer::{ContainerRect, PointerInput, PointerTracker};
use crate::pool::{ItemPool, ItemSpec};
use crate::sequencer::{self, SpawnContext, Spin};
use crate::smoothing::MotionSmoother;
use crate::timeline::{TimelineFrame, TimelineProvider};
use crate::variants::{TrailVariant, VariantParams};

/// Lifecycle phase of a controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Uninitialized,
    AwaitingFirstMove,
    Running,
    Destroyed,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::AwaitingFirstMove => "awaiting-first-move",
            Phase::Running => "running",
            Phase::Destroyed => "destroyed",
        }
    }
}

/// Whether any timeline is currently in flight. Drives only the z-counter
/// reset between bursts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Activity {
    Idle,
    Active,
}

/// Top-level engine object. The provider is injected so hosts can defer the
/// animation capability and tests can substitute a fake.
#[derive(Debug)]
pub struct TrailController<P: TimelineProvider> {
    cfg: TrailConfig,
    variant: TrailVariant,
    params: VariantParams,
    provider: P,

    tracker: PointerTracker,
    smoother: MotionSmoother,
    gate: DistanceGate,
    pool: ItemPool,
    rng: SmallRng,

    phase: Phase,
    activity: Activity,
    z: u32,
    visible: VecDeque<ItemId>,
    visible_cap: Option<usize>,
    prev_angle: Option<f32>,
    last_spin: Spin,
    warned_not_ready: bool,

    frames: Vec<TimelineFrame>,
    outputs: Outputs,
}

impl<P: TimelineProvider> TrailController<P> {
    pub fn new(
        cfg: TrailConfig,
        items: Vec<ItemSpec>,
        variant: TrailVariant,
        provider: P,
    ) -> Result<Self, TrailError> {
        cfg.validate()?;
        let pool = ItemPool::new(items)?;
        let mut params = variant.params();
        if let Some(factor) = cfg.smoothing {
            params.smoothing = factor;
        }
        let visible_cap = cfg.visible_cap.or(params.visible_cap);
        Ok(Self {
            smoother: MotionSmoother::new(params.smoothing),
            gate: DistanceGate::new(cfg.gate_threshold),
            tracker: PointerTracker::default(),
            rng: SmallRng::seed_from_u64(cfg.rng_seed),
            z: cfg.z_base,
            phase: Phase::Uninitialized,
            activity: Activity::Idle,
            visible: VecDeque::new(),
            visible_cap,
            prev_angle: None,
            last_spin: Spin::None,
            warned_not_ready: false,
            frames: Vec::new(),
            outputs: Outputs::default(),
            cfg,
            variant,
            params,
            provider,
            pool,
        })
    }

    /// Arm the controller on a container. Inert when the host policy has the
    /// effect disabled; a destroyed controller stays destroyed.
    pub fn start(&mut self, rect: ContainerRect) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        if !self.cfg.enabled {
            log::debug!("trail effect disabled by host policy");
            return;
        }
        self.tracker.set_rect(rect);
        self.phase = Phase::AwaitingFirstMove;
        log::debug!("trail controller armed (variant {:?})", self.variant);
    }

    /// Feed one raw input event. The first valid sample engages the update
    /// loop; before `start` and after `destroy` events are ignored.
    pub fn pointer_input(&mut self, input: &PointerInput) {
        if !matches!(self.phase, Phase::AwaitingFirstMove | Phase::Running) {
            return;
        }
        let sample = match self.tracker.track(input) {
            Some(sample) => sample,
            None => return,
        };
        if self.phase == Phase::AwaitingFirstMove {
            // Snap the smoothed position and gate baseline so the first
            // spawn happens one threshold of travel later, not at rest.
            self.smoother.step(sample);
            self.gate.check(sample);
            self.phase = Phase::Running;
            log::debug!("first pointer move; update loop engaged");
        }
    }

    /// Ingest new container geometry (viewport resize).
    pub fn set_container_rect(&mut self, rect: ContainerRect) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.tracker.set_rect(rect);
    }

    /// Refresh one item's measured bounding box.
    pub fn set_item_size(&mut self, id: ItemId, size: Size) -> Result<(), TrailError> {
        if self.phase == Phase::Destroyed {
            return Ok(());
        }
        self.pool.set_size(id, size)
    }

    /// Run one tick: smooth, gate, spawn, advance timelines. Returns the
    /// changes and events of this tick; a non-running controller returns
    /// empty outputs.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        if self.phase != Phase::Running {
            return &self.outputs;
        }
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        if let Some(raw) = self.tracker.last() {
            let smoothed = self.smoother.step(raw);
            if self.gate.check(raw) {
                self.spawn(raw, smoothed);
            }
        }

        let mut frames = std::mem::take(&mut self.frames);
        frames.clear();
        self.provider.advance(dt, &mut frames);
        for frame in &frames {
            let z = match self.pool.get_mut(frame.item) {
                Some(item) => {
                    item.transform = frame.transform;
                    item.z
                }
                None => continue,
            };
            self.outputs.push_change(Change {
                item: frame.item,
                transform: frame.transform,
                z,
            });
            if frame.finished {
                self.pool.set_timeline(frame.item, None);
                self.visible.retain(|i| *i != frame.item);
                self.outputs.push_event(TrailEvent::TimelineCompleted {
                    item: frame.item,
                    timeline: frame.timeline,
                });
            }
        }
        self.frames = frames;

        let any_active = self.provider.active_count() > 0;
        match (self.activity, any_active) {
            (Activity::Idle, true) => self.activity = Activity::Active,
            (Activity::Active, false) => {
                self.activity = Activity::Idle;
                self.z = self.cfg.z_base;
                self.outputs.push_event(TrailEvent::BurstEnded);
            }
            _ => {}
        }

        &self.outputs
    }

    /// Tear down: kill every in-flight timeline, detach all state, and make
    /// every subsequent call a no-op.
    pub fn destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.provider.kill_all();
        self.pool.clear_timelines();
        self.visible.clear();
        self.outputs.clear();
        self.outputs.push_event(TrailEvent::Destroyed);
        self.phase = Phase::Destroyed;
        self.activity = Activity::Idle;
        self.z = self.cfg.z_base;
        log::debug!("trail controller destroyed");
    }

    fn spawn(&mut self, raw: Vec2, smoothed: Vec2) {
        let item_id = self.pool.advance();

        // Last-spawn-wins: an item never carries two timelines.
        if let Some(prev) = self.provider.kill_item(item_id) {
            self.pool.set_timeline(item_id, None);
            self.visible.retain(|i| *i != item_id);
            self.outputs.push_event(TrailEvent::TimelineKilled {
                item: item_id,
                timeline: prev,
            });
        }

        let direction = (raw - smoothed).normalize_or_zero();
        let spin = self.update_spin(direction);
        let ctx = SpawnContext {
            raw,
            smoothed,
            speed: raw.distance(smoothed),
            direction,
            spin,
        };
        let spec = match self.pool.get(item_id) {
            Some(item) => sequencer::build_timeline(item, &ctx, &self.params, &mut self.rng),
            None => return,
        };

        if !self.provider.ready() {
            // Gate and cursor already advanced, so nothing desynchronizes
            // once the provider comes up.
            if !self.warned_not_ready {
                log::warn!("timeline provider not ready; trail spawns degrade to no-ops");
                self.warned_not_ready = true;
            }
            self.outputs.push_event(TrailEvent::SpawnSkipped { item: item_id });
            return;
        }

        let start = spec.start;
        if let Some(timeline) = self.provider.spawn(spec) {
            self.z = self.z.wrapping_add(1);
            if let Some(item) = self.pool.get_mut(item_id) {
                item.transform = start;
                item.z = self.z;
            }
            self.pool.set_timeline(item_id, Some(timeline));
            self.outputs.push_change(Change {
                item: item_id,
                transform: start,
                z: self.z,
            });
            self.outputs.push_event(TrailEvent::Spawned {
                item: item_id,
                timeline,
                position: raw,
            });
            self.visible.push_back(item_id);
            self.enforce_visible_cap();
        }
    }

    /// Rolling most-recent-N window: force the oldest still-visible item
    /// into a fast exit once the cap is exceeded.
    fn enforce_visible_cap(&mut self) {
        let cap = match self.visible_cap {
            Some(cap) => cap,
            None => return,
        };
        while self.visible.len() > cap {
            let oldest = match self.visible.pop_front() {
                Some(oldest) => oldest,
                None => break,
            };
            if let Some(prev) = self.provider.kill_item(oldest) {
                self.outputs.push_event(TrailEvent::TimelineKilled {
                    item: oldest,
                    timeline: prev,
                });
            }
            let spec = match self.pool.get(oldest) {
                Some(item) => sequencer::build_early_exit(item),
                None => continue,
            };
            let timeline = self.provider.spawn(spec);
            self.pool.set_timeline(oldest, timeline);
        }
    }

    /// Track the running movement angle to pick the spin direction for
    /// rotation-aware variants.
    fn update_spin(&mut self, direction: Vec2) -> Spin {
        if direction == Vec2::ZERO {
            return self.last_spin;
        }
        let angle = direction.angle();
        if let Some(prev) = self.prev_angle {
            let mut delta = angle - prev;
            if delta > PI {
                delta -= 2.0 * PI;
            } else if delta < -PI {
                delta += 2.0 * PI;
            }
            // Screen space has y down, so a positive delta turns clockwise.
            if delta > 1e-3 {
                self.last_spin = Spin::Clockwise;
            } else if delta < -1e-3 {
                self.last_spin = Spin::CounterClockwise;
            }
        }
        self.prev_angle = Some(angle);
        self.last_spin
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[inline]
    pub fn variant(&self) -> TrailVariant {
        self.variant
    }

    #[inline]
    pub fn params(&self) -> &VariantParams {
        &self.params
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.cfg
    }

    #[inline]
    pub fn pool(&self) -> &ItemPool {
        &self.pool
    }

    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable provider access, e.g. to flip readiness when assets land.
    #[inline]
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Outputs of the most recent tick (or of `destroy`).
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }
}
