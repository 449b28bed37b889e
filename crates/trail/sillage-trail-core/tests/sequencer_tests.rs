//! Variant timeline shapes: what the sequencer emits for each preset.

use approx::assert_abs_diff_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sillage_trail_core::sequencer::{build_early_exit, build_timeline};
use sillage_trail_core::{
    ItemId, ItemPool, ItemSpec, PooledItem, SpawnContext, Spin, TrailVariant, TweenTarget, Vec2,
};

fn pool() -> ItemPool {
    ItemPool::new(vec![ItemSpec {
        source: "tile.jpg".into(),
        width: 160.0,
        height: 200.0,
    }])
    .unwrap()
}

fn ctx(raw: Vec2, smoothed: Vec2, spin: Spin) -> SpawnContext {
    SpawnContext {
        raw,
        smoothed,
        speed: raw.distance(smoothed),
        direction: (raw - smoothed).normalize_or_zero(),
        spin,
    }
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

fn spec_for(variant: TrailVariant, item: &PooledItem, ctx: &SpawnContext) -> sillage_trail_core::TimelineSpec {
    build_timeline(item, ctx, &variant.params(), &mut rng())
}

#[test]
fn classic_appears_along_the_path_and_fades_in_place() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let ctx = ctx(Vec2::new(200.0, 100.0), Vec2::new(180.0, 100.0), Spin::None);
    let spec = spec_for(TrailVariant::Classic, item, &ctx);

    // Start: centered on the smoothed position, hidden.
    assert_abs_diff_eq!(spec.start.position.x, 100.0, epsilon = 1e-4);
    assert_abs_diff_eq!(spec.start.position.y, 0.0, epsilon = 1e-4);
    assert_eq!(spec.start.opacity, 0.0);
    assert_abs_diff_eq!(spec.duration(), 1.25, epsilon = 1e-4);

    // Appear end: centered on the raw position, fully visible.
    let at_appear = spec.sample(0.45);
    assert_abs_diff_eq!(at_appear.position.x, 120.0, epsilon = 1e-3);
    assert_abs_diff_eq!(at_appear.opacity, 1.0, epsilon = 1e-3);

    // Exit end: gone, shrunk, and not displaced (no drift in Classic).
    let at_end = spec.sample(spec.duration());
    assert_abs_diff_eq!(at_end.opacity, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(at_end.scale, 0.3, epsilon = 1e-3);
    assert_abs_diff_eq!(at_end.position.x, 120.0, epsilon = 1e-3);
}

#[test]
fn pop_in_starts_at_zero_scale_with_seeded_tilt() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let ctx = ctx(Vec2::new(50.0, 50.0), Vec2::new(40.0, 50.0), Spin::None);

    let spec = spec_for(TrailVariant::PopIn, item, &ctx);
    assert_eq!(spec.start.scale, 0.0);
    assert!(spec.start.rotation >= -15.0 && spec.start.rotation <= 15.0);

    // Same seed, same tilt: the sequencer is deterministic.
    let again = spec_for(TrailVariant::PopIn, item, &ctx);
    assert_eq!(spec, again);
}

#[test]
fn flash_resolves_filters_to_neutral_over_the_hold() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let ctx = ctx(Vec2::new(50.0, 50.0), Vec2::new(40.0, 50.0), Spin::None);
    let spec = spec_for(TrailVariant::Flash, item, &ctx);

    assert_abs_diff_eq!(spec.start.filter.brightness, 2.5, epsilon = 1e-4);
    assert_abs_diff_eq!(spec.start.filter.contrast, 1.6, epsilon = 1e-4);
    assert_abs_diff_eq!(spec.start.filter.blur, 10.0, epsilon = 1e-4);

    let held = spec.sample(0.9);
    assert_abs_diff_eq!(held.filter.brightness, 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(held.filter.contrast, 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(held.filter.blur, 0.0, epsilon = 1e-3);
}

#[test]
fn inner_zoom_dezooms_the_content() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let ctx = ctx(Vec2::new(50.0, 50.0), Vec2::new(40.0, 50.0), Spin::None);
    let spec = spec_for(TrailVariant::InnerZoom, item, &ctx);

    assert_abs_diff_eq!(spec.start.inner_scale, 1.75, epsilon = 1e-4);
    assert_abs_diff_eq!(spec.sample(1.0).inner_scale, 1.0, epsilon = 1e-3);
}

#[test]
fn fling_drifts_outward_along_the_movement_direction() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    // Moving right: raw leads smoothed by 20px.
    let ctx = ctx(Vec2::new(200.0, 100.0), Vec2::new(180.0, 100.0), Spin::None);
    let spec = spec_for(TrailVariant::Fling, item, &ctx);

    let has_drift = spec.tweens.iter().any(|t| {
        matches!(
            t.target,
            TweenTarget::Position { from, to } if from != to && t.delay > 0.0
        )
    });
    assert!(has_drift, "fling must carry a delayed positional drift tween");

    // 20px of travel at drift 1.25 -> 25px past the raw landing point.
    let at_end = spec.sample(spec.duration());
    assert_abs_diff_eq!(at_end.position.x, 120.0 + 25.0, epsilon = 1e-3);
    assert_abs_diff_eq!(at_end.position.y, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(at_end.opacity, 0.0, epsilon = 1e-3);
}

#[test]
fn speed_scale_maps_speed_onto_the_look() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let params = TrailVariant::SpeedScale.params();
    let map = params.speed_map.unwrap();

    // At rest: small, dim, blurred, fully desaturated.
    let slow = ctx(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), Spin::None);
    let slow_spec = build_timeline(item, &slow, &params, &mut rng());
    assert_abs_diff_eq!(slow_spec.start.filter.grayscale, 1.0, epsilon = 1e-4);
    assert_abs_diff_eq!(slow_spec.start.filter.blur, 5.0, epsilon = 1e-4);
    assert_abs_diff_eq!(slow_spec.start.filter.brightness, 0.55, epsilon = 1e-4);
    let slow_appear = slow_spec.sample(params.appear.duration);
    assert_abs_diff_eq!(slow_appear.scale, 0.35, epsilon = 1e-3);

    // Far past max speed: clamped at the fast end of every mapping.
    let fast = ctx(
        Vec2::new(300.0, 50.0),
        Vec2::new(300.0 - map.max_speed * 3.0, 50.0),
        Spin::None,
    );
    let fast_spec = build_timeline(item, &fast, &params, &mut rng());
    assert_abs_diff_eq!(fast_spec.start.filter.grayscale, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(fast_spec.start.filter.blur, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(fast_spec.start.filter.brightness, 1.25, epsilon = 1e-4);
    let fast_appear = fast_spec.sample(params.appear.duration);
    assert_abs_diff_eq!(fast_appear.scale, 1.4, epsilon = 1e-3);
}

#[test]
fn rotate_in_pre_rotates_against_the_spin() {
    let pool = pool();
    let item = pool.get(ItemId(0)).unwrap();
    let moving = ctx(Vec2::new(200.0, 100.0), Vec2::new(180.0, 100.0), Spin::Clockwise);
    let spec = spec_for(TrailVariant::RotateIn, item, &moving);
    assert_abs_diff_eq!(spec.start.rotation, -14.0, epsilon = 1e-4);
    assert_abs_diff_eq!(
        spec.sample(TrailVariant::RotateIn.params().appear.duration).rotation,
        0.0,
        epsilon = 1e-3
    );

    let counter = ctx(
        Vec2::new(200.0, 100.0),
        Vec2::new(180.0, 100.0),
        Spin::CounterClockwise,
    );
    let spec = spec_for(TrailVariant::RotateIn, item, &counter);
    assert_abs_diff_eq!(spec.start.rotation, 14.0, epsilon = 1e-4);

    // No established spin yet: spawn already settled.
    let still = ctx(Vec2::new(200.0, 100.0), Vec2::new(180.0, 100.0), Spin::None);
    let spec = spec_for(TrailVariant::RotateIn, item, &still);
    assert_eq!(spec.start.rotation, 0.0);
}

#[test]
fn early_exit_picks_up_the_current_state() {
    let mut pool = pool();
    {
        let item = pool.get_mut(ItemId(0)).unwrap();
        item.transform.opacity = 0.8;
        item.transform.scale = 1.2;
    }
    let item = pool.get(ItemId(0)).unwrap();
    let spec = build_early_exit(item);

    assert_eq!(spec.start, item.transform);
    assert_abs_diff_eq!(spec.duration(), 0.25, epsilon = 1e-4);
    let at_end = spec.sample(0.25);
    assert_abs_diff_eq!(at_end.opacity, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(at_end.scale, 1.2 * 0.85, epsilon = 1e-3);
}
