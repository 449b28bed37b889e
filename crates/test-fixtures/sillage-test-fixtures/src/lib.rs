//! Manifest-driven access to the repository's JSON fixtures: recorded pointer
//! paths and item sets shared by the trail-core integration tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "pointer-paths")]
    pointer_paths: HashMap<String, String>,
    #[serde(rename = "item-sets")]
    item_sets: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Container geometry recorded with a pointer path, in client coordinates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RectFixture {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A recorded pointer path: container rect plus client-coordinate samples in
/// delivery order.
#[derive(Debug, Clone, Deserialize)]
pub struct PointerPathFixture {
    pub rect: RectFixture,
    pub samples: Vec<[f32; 2]>,
}

pub mod pointer_paths {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.pointer_paths.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.pointer_paths, "pointer path", name)?;
        read_to_string(rel)
    }

    pub fn load(name: &str) -> Result<PointerPathFixture> {
        let rel = lookup(&MANIFEST.pointer_paths, "pointer path", name)?;
        load_json(rel)
    }
}

pub mod item_sets {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.item_sets.keys().cloned().collect()
    }

    /// Raw JSON array; consumers deserialize into their own item spec type.
    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.item_sets, "item set", name)?;
        read_to_string(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_all_fixture_kinds() {
        assert!(pointer_paths::keys().contains(&"straight-line-400".to_string()));
        assert!(item_sets::keys().contains(&"portfolio-four".to_string()));
    }

    #[test]
    fn straight_line_path_loads_and_is_monotonic() {
        let path = pointer_paths::load("straight-line-400").unwrap();
        assert_eq!(path.samples.first(), Some(&[0.0, 300.0]));
        assert_eq!(path.samples.last(), Some(&[400.0, 300.0]));
        assert!(path
            .samples
            .windows(2)
            .all(|pair| pair[0][0] <= pair[1][0]));
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        assert!(pointer_paths::json("no-such-path").is_err());
        assert!(item_sets::json("no-such-set").is_err());
    }
}
