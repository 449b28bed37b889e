//! Output contracts from the controller.
//!
//! Outputs carry the per-tick transform changes, keyed by item, and a
//! separate list of semantic events. Adapters apply changes to the host UI
//! layer and may transport events for observability.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemId, TimelineId};
use crate::math::Vec2;
use crate::transform::ItemTransform;

/// One changed item state for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub item: ItemId,
    pub transform: ItemTransform,
    /// Stacking order; only moves at spawn time.
    pub z: u32,
}

/// Discrete semantic signals emitted while stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TrailEvent {
    /// A pooled item was assigned a fresh timeline at this position.
    Spawned {
        item: ItemId,
        timeline: TimelineId,
        position: Vec2,
    },
    /// The gate fired but the provider was not ready; nothing was animated.
    SpawnSkipped { item: ItemId },
    /// An in-flight timeline was killed (last-spawn-wins or window eviction).
    TimelineKilled { item: ItemId, timeline: TimelineId },
    /// A timeline ran to completion and self-disposed.
    TimelineCompleted { item: ItemId, timeline: TimelineId },
    /// The last in-flight timeline finished; the z counter was reset.
    BurstEnded,
    /// The controller was torn down; all timelines were killed.
    Destroyed,
}

/// Outputs returned by `TrailController::update`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<TrailEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: TrailEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
