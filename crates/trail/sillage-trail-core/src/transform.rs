//! Render-ready transform state for one pooled item. Pure data: adapters map
//! these fields onto whatever UI layer they own (CSS transform + filter,
//! canvas draw state, a scene-graph node).

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Filter channel values. Neutral defaults render the item untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Blur radius in px.
    pub blur: f32,
    /// 1.0 = neutral.
    pub brightness: f32,
    /// 0.0 = full color, 1.0 = fully desaturated.
    pub grayscale: f32,
    /// 1.0 = neutral.
    pub contrast: f32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            blur: 0.0,
            brightness: 1.0,
            grayscale: 0.0,
            contrast: 1.0,
        }
    }
}

/// Full transform state of one item. Mutated only through timeline frames;
/// idle items sit at opacity 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemTransform {
    /// Top-left corner in container-local coordinates.
    pub position: Vec2,
    /// Outer scale applied to the whole tile.
    pub scale: f32,
    /// Scale of the inner content (background image de-zoom).
    pub inner_scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// 0.0 = hidden, 1.0 = opaque.
    pub opacity: f32,
    pub filter: FilterState,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            inner_scale: 1.0,
            rotation: 0.0,
            opacity: 0.0,
            filter: FilterState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hidden_and_neutral() {
        let t = ItemTransform::default();
        assert_eq!(t.opacity, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.filter, FilterState::default());
    }
}
