//! Sillage Trail Core (renderer-agnostic)
//!
//! Pointer-trail animation engine: raw mouse/touch events become a
//! container-local sample stream, a distance gate turns travel into discrete
//! spawns, a fixed item pool recycles visual tiles round-robin, and a
//! variant-parameterized sequencer drives each spawn through an
//! appear/hold/exit timeline. The controller emits per-tick transform
//! changes and semantic events; adapters own the actual rendering.

pub mod config;
pub mod controller;
pub mod ease;
pub mod error;
pub mod gate;
pub mod ids;
pub mod math;
pub mod outputs;
pub mod pointer;
pub mod pool;
pub mod runtime;
pub mod sequencer;
pub mod smoothing;
pub mod timeline;
pub mod transform;
pub mod variants;

// Re-exports for consumers (adapters)
pub use config::TrailConfig;
pub use controller::{Activity, Phase, TrailController};
pub use ease::Ease;
pub use error::TrailError;
pub use gate::DistanceGate;
pub use ids::{ItemId, TimelineId};
pub use math::{Size, Vec2};
pub use outputs::{Change, Outputs, TrailEvent};
pub use pointer::{ContainerRect, PointerInput, PointerTracker, TouchPoint};
pub use pool::{ItemPool, ItemSpec, PooledItem};
pub use runtime::TweenRuntime;
pub use sequencer::{SpawnContext, Spin};
pub use smoothing::MotionSmoother;
pub use timeline::{TimelineFrame, TimelineProvider, TimelineSpec, Tween, TweenTarget};
pub use transform::{FilterState, ItemTransform};
pub use variants::{
    AppearParams, ExitParams, HoldParams, RotationMode, SpeedMap, TrailVariant, VariantParams,
};
