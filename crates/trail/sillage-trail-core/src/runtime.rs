//! Built-in timeline provider: a small tween runtime advanced once per tick.
//!
//! In-flight timelines are kept in insertion order so frame output is
//! deterministic; the item index enforces the at-most-one-timeline-per-item
//! invariant with last-spawn-wins semantics.

use hashbrown::HashMap;

use crate::ids::{IdAllocator, ItemId, TimelineId};
use crate::timeline::{TimelineFrame, TimelineProvider, TimelineSpec};

#[derive(Debug)]
struct ActiveTimeline {
    id: TimelineId,
    spec: TimelineSpec,
    elapsed: f32,
}

#[derive(Debug)]
pub struct TweenRuntime {
    ready: bool,
    ids: IdAllocator,
    active: Vec<ActiveTimeline>,
    by_item: HashMap<ItemId, TimelineId>,
}

impl Default for TweenRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenRuntime {
    pub fn new() -> Self {
        Self {
            ready: true,
            ids: IdAllocator::new(),
            active: Vec::new(),
            by_item: HashMap::new(),
        }
    }

    /// A runtime that reports not-ready until `set_ready(true)`; hosts use
    /// this to defer the effect until assets are in place.
    pub fn deferred() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    #[inline]
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    fn remove(&mut self, id: TimelineId) -> bool {
        let before = self.active.len();
        self.active.retain(|tl| tl.id != id);
        let removed = self.active.len() != before;
        if removed {
            self.by_item.retain(|_, bound| *bound != id);
        }
        removed
    }
}

impl TimelineProvider for TweenRuntime {
    #[inline]
    fn ready(&self) -> bool {
        self.ready
    }

    fn spawn(&mut self, spec: TimelineSpec) -> Option<TimelineId> {
        if !self.ready {
            return None;
        }
        if let Some(prev) = self.by_item.get(&spec.item).copied() {
            self.remove(prev);
        }
        let id = self.ids.alloc_timeline();
        self.by_item.insert(spec.item, id);
        self.active.push(ActiveTimeline {
            id,
            spec,
            elapsed: 0.0,
        });
        Some(id)
    }

    fn kill(&mut self, id: TimelineId) -> bool {
        self.remove(id)
    }

    fn kill_item(&mut self, item: ItemId) -> Option<TimelineId> {
        let id = self.by_item.get(&item).copied()?;
        self.remove(id);
        Some(id)
    }

    fn kill_all(&mut self) {
        self.active.clear();
        self.by_item.clear();
    }

    #[inline]
    fn item_timeline(&self, item: ItemId) -> Option<TimelineId> {
        self.by_item.get(&item).copied()
    }

    #[inline]
    fn active_count(&self) -> usize {
        self.active.len()
    }

    fn advance(&mut self, dt: f32, frames: &mut Vec<TimelineFrame>) {
        for tl in &mut self.active {
            tl.elapsed += dt;
            let finished = tl.elapsed >= tl.spec.duration();
            frames.push(TimelineFrame {
                timeline: tl.id,
                item: tl.spec.item,
                transform: tl.spec.sample(tl.elapsed),
                finished,
            });
        }
        let by_item = &mut self.by_item;
        self.active.retain(|tl| {
            let finished = tl.elapsed >= tl.spec.duration();
            if finished {
                by_item.retain(|_, bound| *bound != tl.id);
            }
            !finished
        });
    }
}
