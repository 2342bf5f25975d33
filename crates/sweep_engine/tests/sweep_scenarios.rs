#![allow(missing_docs)]
//! Scenario tests for the swept collision pipeline (ray → single → group).

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sweep_engine::prelude::*;

const EPSILON: f32 = 1e-5;

fn square(x: f32, y: f32, side: f32) -> Rect {
    Rect::new(Vec2::new(x, y), Vec2::new(side, side))
}

fn assert_valid_hit(hit: &Hit) {
    let (nx, ny) = (hit.normal.x.abs(), hit.normal.y.abs());
    assert!(
        (nx == 1.0 && ny == 0.0) || (nx == 0.0 && ny == 1.0),
        "normal must be axis-aligned: {:?}",
        hit.normal
    );
    assert!((0.0..=1.0).contains(&hit.time), "hit time out of range: {}", hit.time);
}

fn assert_valid_sweep(mover: &Rect, delta: Vec2, sweep: &Sweep) {
    assert!((0.0..=1.0).contains(&sweep.time), "sweep time out of range: {}", sweep.time);
    match &sweep.hit {
        Some(hit) => {
            assert_valid_hit(hit);
            assert_eq!(sweep.time, hit.time);
        }
        None => {
            assert_eq!(sweep.time, 1.0);
            assert_eq!(sweep.pos, mover.center + delta);
        }
    }
}

#[test]
fn head_on_contact_reports_half_time_left_face() {
    let mover = square(0.0, 0.0, 10.0);
    let target = square(20.0, 0.0, 10.0);
    let delta = Vec2::new(20.0, 0.0);

    let raw = ray_sweep(mover.center, delta, &target, mover.half_extents()).expect("ray hit");
    assert_eq!(raw.time, 0.5);
    assert_eq!(raw.normal, Vec2::new(-1.0, 0.0));
    assert_relative_eq!(raw.pos, Vec2::new(10.0, 0.0), epsilon = EPSILON);
    assert_relative_eq!(raw.delta, Vec2::new(-10.0, 0.0), epsilon = EPSILON);

    let sweep = single_sweep(&mover, &target, delta);
    let hit = sweep.hit.expect("sweep hit");
    assert_eq!(sweep.time, 0.5);
    assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    assert_relative_eq!(hit.delta, Vec2::new(-10.0, 0.0), epsilon = EPSILON);
    assert_relative_eq!(sweep.pos, Vec2::new(10.0, 0.0), epsilon = EPSILON);
}

#[test]
fn moving_away_is_unobstructed() {
    let mover = square(0.0, 0.0, 10.0);
    let target = square(20.0, 0.0, 10.0);
    let delta = Vec2::new(-20.0, 0.0);

    let sweep = single_sweep(&mover, &target, delta);
    assert!(sweep.hit.is_none());
    assert_eq!(sweep.time, 1.0);
    assert_eq!(sweep.pos, Vec2::new(-20.0, 0.0));

    let grouped = group_sweep(&mover, delta, &[target, square(-60.0, 40.0, 10.0)]);
    assert_eq!(grouped, Sweep::unobstructed(&mover, delta));
}

#[test]
fn zero_displacement_overlap_is_immediate() {
    let mover = square(5.0, 5.0, 10.0);
    let target = square(8.0, 5.0, 10.0);

    let sweep = group_sweep(&mover, Vec2::zeros(), &[square(100.0, 100.0, 10.0), target]);
    let hit = sweep.hit.expect("overlapping at rest");
    assert_eq!(sweep.time, 0.0);
    assert_eq!(hit.pos, mover.center);
    assert_eq!(sweep.pos, mover.center);
    assert_valid_hit(&hit);
}

#[test]
fn group_returns_earliest_of_three() {
    let mover = square(0.0, 0.0, 10.0);
    let delta = Vec2::new(100.0, 0.0);
    let early = square(30.0, 0.0, 10.0);
    let late = square(60.0, 0.0, 10.0);
    let miss = square(0.0, 100.0, 10.0);

    let expected = single_sweep(&mover, &early, delta);
    assert_relative_eq!(expected.time, 0.2, epsilon = EPSILON);
    assert_relative_eq!(single_sweep(&mover, &late, delta).time, 0.5, epsilon = EPSILON);
    assert!(!single_sweep(&mover, &miss, delta).is_hit());

    assert_eq!(group_sweep(&mover, delta, &[early, late, miss]), expected);
    assert_eq!(group_sweep(&mover, delta, &[late, miss, early]), expected);
}

#[test]
fn thin_wall_is_not_tunnelled() {
    // A discrete test at start and end would see no overlap at all
    let mover = square(0.0, 0.0, 4.0);
    let wall = Rect::new(Vec2::new(50.0, 0.0), Vec2::new(1.0, 40.0));
    let delta = Vec2::new(200.0, 0.0);

    assert!(!mover.overlaps(&wall));
    assert!(!mover.translated(delta).overlaps(&wall));

    let sweep = group_sweep(&mover, delta, &[wall]);
    let hit = sweep.hit.expect("wall in the path");
    assert_eq!(hit.normal, Vec2::new(-1.0, 0.0));
    assert!(sweep.pos.x <= 49.0);
}

#[test]
fn random_sweeps_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = SceneConfig::new().with_collider_count(10).with_seed(11);
    let scene = Scene::generate(&config).expect("scene");

    for _ in 0..500 {
        let size = Vec2::new(rng.gen_range(2.0..40.0), rng.gen_range(2.0..40.0));
        let center = Vec2::new(rng.gen_range(0.0..640.0), rng.gen_range(0.0..360.0));
        let mover = Rect::new(center, size);
        let delta = Vec2::new(rng.gen_range(-300.0..300.0), rng.gen_range(-300.0..300.0));

        let mut earliest: Option<Sweep> = None;
        for target in scene.colliders.targets() {
            let sweep = single_sweep(&mover, target, delta);
            assert_valid_sweep(&mover, delta, &sweep);
            if sweep.is_hit() && earliest.map_or(true, |best| sweep.time < best.time) {
                earliest = Some(sweep);
            }
        }

        let grouped = group_sweep(&mover, delta, scene.colliders.targets());
        assert_valid_sweep(&mover, delta, &grouped);
        assert_eq!(grouped, earliest.unwrap_or_else(|| Sweep::unobstructed(&mover, delta)));
    }
}

#[test]
fn contact_point_lies_on_target() {
    let mut rng = StdRng::seed_from_u64(17);
    let target = square(0.0, 0.0, 20.0);

    for _ in 0..200 {
        let mover = Rect::new(
            Vec2::new(rng.gen_range(-80.0..80.0), rng.gen_range(-80.0..80.0)),
            Vec2::new(rng.gen_range(1.0..15.0), rng.gen_range(1.0..15.0)),
        );
        let delta = -mover.center * rng.gen_range(0.5_f32..2.0);
        if let Some(hit) = single_sweep(&mover, &target, delta).hit {
            let (min, max) = (target.min(), target.max());
            assert!(hit.pos.x >= min.x && hit.pos.x <= max.x, "{:?}", hit.pos);
            assert!(hit.pos.y >= min.y && hit.pos.y <= max.y, "{:?}", hit.pos);
        }
    }
}

#[test]
fn scene_walk_keeps_player_out_of_colliders_when_starting_clear() {
    let config = SceneConfig::new().with_seed(5);
    let mut scene = Scene::generate(&config).expect("scene");
    let start = scene.player;

    // A single sweep from a clear start never ends inside a collider by more
    // than the rounding allowance of the safe position.
    let target = Vec2::new(620.0, 340.0);
    let sweep = scene.step_towards(target);
    let shrunk = Rect::new(scene.player.center, scene.player.size - Vec2::new(4.0, 4.0));
    assert!(!scene.colliders.any_overlap(&shrunk), "player sank into a collider");
    if !sweep.is_hit() {
        assert_eq!(scene.player.center, start.center + (target - start.center));
    }
}
