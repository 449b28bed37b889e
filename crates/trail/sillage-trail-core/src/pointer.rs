//! Pointer input: raw device events unified into a container-local sample
//! stream. Mouse and touch feed the same position reference; adapters only
//! forward client coordinates and the container rectangle.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Container geometry in client coordinates, refreshed on viewport resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerRect {
    #[inline]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// One active touch contact, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// A raw input-device event. Both modalities resolve to the same sample
/// stream; touch uses the first active contact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    Mouse { client_x: f32, client_y: f32 },
    Touch { touches: Vec<TouchPoint> },
}

/// Converts raw input events into container-local samples and retains the
/// latest one for the update loop.
#[derive(Debug, Default)]
pub struct PointerTracker {
    rect: ContainerRect,
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new(rect: ContainerRect) -> Self {
        Self { rect, last: None }
    }

    /// Ingest new container geometry (viewport resize).
    #[inline]
    pub fn set_rect(&mut self, rect: ContainerRect) {
        self.rect = rect;
    }

    #[inline]
    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    /// Resolve an event to a container-local sample and retain it. A
    /// malformed event (empty touch list) reproduces the last sample; before
    /// any valid sample this returns None.
    pub fn track(&mut self, input: &PointerInput) -> Option<Vec2> {
        let client = match input {
            PointerInput::Mouse { client_x, client_y } => Some((*client_x, *client_y)),
            PointerInput::Touch { touches } => {
                touches.first().map(|t| (t.client_x, t.client_y))
            }
        };
        if let Some((cx, cy)) = client {
            self.last = Some(Vec2::new(cx - self.rect.left, cy - self.rect.top));
        }
        self.last
    }

    /// Latest container-local sample, if any event has arrived.
    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_sample_is_container_local() {
        let mut tracker = PointerTracker::new(ContainerRect::new(100.0, 50.0, 800.0, 600.0));
        let sample = tracker.track(&PointerInput::Mouse {
            client_x: 160.0,
            client_y: 90.0,
        });
        assert_eq!(sample, Some(Vec2::new(60.0, 40.0)));
    }

    #[test]
    fn touch_uses_first_contact() {
        let mut tracker = PointerTracker::new(ContainerRect::default());
        let sample = tracker.track(&PointerInput::Touch {
            touches: vec![
                TouchPoint {
                    client_x: 10.0,
                    client_y: 20.0,
                },
                TouchPoint {
                    client_x: 99.0,
                    client_y: 99.0,
                },
            ],
        });
        assert_eq!(sample, Some(Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn empty_touch_list_reproduces_last_sample() {
        let mut tracker = PointerTracker::new(ContainerRect::default());
        assert_eq!(tracker.track(&PointerInput::Touch { touches: vec![] }), None);

        tracker.track(&PointerInput::Mouse {
            client_x: 5.0,
            client_y: 6.0,
        });
        let sample = tracker.track(&PointerInput::Touch { touches: vec![] });
        assert_eq!(sample, Some(Vec2::new(5.0, 6.0)));
    }
}
