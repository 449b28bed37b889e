//! Error types for the trail engine.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// Errors surfaced at construction and configuration time. The running
/// engine itself fails soft (no-op spawns, pointer-centered fallbacks) and
/// never returns these from the per-tick path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TrailError {
    /// The item pool cannot be empty
    #[error("item pool must contain at least one item")]
    EmptyPool,

    /// Variant index outside the supported range
    #[error("invalid variant index: {index} (expected 1..=8)")]
    InvalidVariant { index: u8 },

    /// Configuration failed validation
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Item handle does not belong to this pool
    #[error("item not found: {id:?}")]
    ItemNotFound { id: ItemId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = TrailError::InvalidVariant { index: 12 };
        assert_eq!(err.to_string(), "invalid variant index: 12 (expected 1..=8)");
    }

    #[test]
    fn serialization_round_trip() {
        let err = TrailError::InvalidConfig {
            reason: "gate_threshold must be positive".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: TrailError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
