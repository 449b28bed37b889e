//! Fixed pool of reusable visual items and the rotating spawn cursor.
//!
//! Items are created once at construction and recycled round-robin; nothing
//! is allocated while the effect runs. The pool owns the items; the
//! controller applies timeline frames to them.

use serde::{Deserialize, Serialize};

use crate::error::TrailError;
use crate::ids::{IdAllocator, ItemId, TimelineId};
use crate::math::Size;
use crate::transform::ItemTransform;

/// Construction input for one pooled item. `source` is an opaque tag (the
/// image URL) the core never interprets; width/height are the measured
/// bounding box, 0 when not yet measured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub source: String,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

/// One reusable animated element.
#[derive(Clone, Debug)]
pub struct PooledItem {
    pub id: ItemId,
    pub source: String,
    size: Size,
    pub transform: ItemTransform,
    pub z: u32,
    timeline: Option<TimelineId>,
}

impl PooledItem {
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn timeline(&self) -> Option<TimelineId> {
        self.timeline
    }
}

/// Ordered, fixed set of items plus the rotating spawn cursor.
#[derive(Debug)]
pub struct ItemPool {
    items: Vec<PooledItem>,
    cursor: usize,
    spawns: u64,
}

impl ItemPool {
    pub fn new(specs: Vec<ItemSpec>) -> Result<Self, TrailError> {
        if specs.is_empty() {
            return Err(TrailError::EmptyPool);
        }
        let mut ids = IdAllocator::new();
        let items = specs
            .into_iter()
            .map(|spec| PooledItem {
                id: ids.alloc_item(),
                source: spec.source,
                size: Size::new(spec.width, spec.height),
                transform: ItemTransform::default(),
                z: 0,
                timeline: None,
            })
            .collect();
        Ok(Self {
            items,
            cursor: 0,
            spawns: 0,
        })
    }

    /// Return the item at the spawn cursor and advance with wraparound.
    /// After N calls the cursor equals `N mod len`.
    #[inline]
    pub fn advance(&mut self) -> ItemId {
        let id = self.items[self.cursor].id;
        self.cursor = (self.cursor + 1) % self.items.len();
        self.spawns += 1;
        id
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn spawns(&self) -> u64 {
        self.spawns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ItemId) -> Option<&PooledItem> {
        self.items.get(id.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut PooledItem> {
        self.items.get_mut(id.0 as usize)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PooledItem> {
        self.items.iter()
    }

    /// Refresh an item's cached bounding box (container/item resize).
    pub fn set_size(&mut self, id: ItemId, size: Size) -> Result<(), TrailError> {
        match self.items.get_mut(id.0 as usize) {
            Some(item) => {
                item.size = size;
                Ok(())
            }
            None => Err(TrailError::ItemNotFound { id }),
        }
    }

    #[inline]
    pub fn set_timeline(&mut self, id: ItemId, timeline: Option<TimelineId>) {
        if let Some(item) = self.items.get_mut(id.0 as usize) {
            item.timeline = timeline;
        }
    }

    /// Drop all timeline handles (teardown).
    pub fn clear_timelines(&mut self) {
        for item in &mut self.items {
            item.timeline = None;
        }
    }
}
