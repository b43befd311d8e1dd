//! Builders for maps, configurations and scripted input.

use glam::Vec3;
use parallax::map::{BoxSpec, MapSpec};
use parallax::{GameConfig, InputSnapshot, Map, Mode, Session, TickReport};

/// Edge lengths of one track slab.
pub const SLAB_SIZE: Vec3 = Vec3::new(4.0, 0.5, 10.0);

/// A box description centred at `center`.
#[must_use]
pub const fn box_at(center: Vec3, size: Vec3) -> BoxSpec {
    BoxSpec { center, size }
}

/// Flat track of touching slabs from `x = 0` past `goal_x`.
///
/// The slab tops sit at `y = 0.25`, so a default body rests at `y = 0.5`.
/// The goal hovers at `(goal_x, 0.7, 0)`.
///
/// # Panics
/// Panics if `goal_x` is not positive.
#[must_use]
pub fn straight_track(goal_x: f32) -> Map {
    assert!(goal_x > 0.0, "track must extend along +x");
    let mut floors = Vec::new();
    let mut x = SLAB_SIZE.x / 2.0;
    while x - SLAB_SIZE.x / 2.0 <= goal_x {
        floors.push(box_at(Vec3::new(x, 0.0, 0.0), SLAB_SIZE));
        x += SLAB_SIZE.x;
    }
    let spec = MapSpec {
        floors,
        obstacles: Vec::new(),
        goal: Vec3::new(goal_x, 0.7, 0.0),
    };
    Map::from_spec(&spec).unwrap_or_else(|e| panic!("track fixture is invalid: {e}"))
}

/// Default configuration starting in `mode`.
#[must_use]
pub fn config_in(mode: Mode) -> GameConfig {
    let mut config = GameConfig::default();
    config.episode.initial_mode = mode;
    config
}

/// Snapshot with only the toggle pulse set.
#[must_use]
pub const fn toggle() -> InputSnapshot {
    InputSnapshot {
        toggle_mode: true,
        ..InputSnapshot::IDLE
    }
}

/// Snapshot with only the jump pulse set.
#[must_use]
pub const fn jump() -> InputSnapshot {
    InputSnapshot {
        jump: true,
        ..InputSnapshot::IDLE
    }
}

/// Snapshot with only the reset pulse set.
#[must_use]
pub const fn reset() -> InputSnapshot {
    InputSnapshot {
        reset: true,
        ..InputSnapshot::IDLE
    }
}

/// Steers the session body toward the map goal for up to `ticks` frames.
///
/// Stops early once the session ignores input. Returns the report of every
/// frame that advanced the world.
pub fn run_toward_goal(session: &mut Session, ticks: usize) -> Vec<TickReport> {
    let goal = session.map().goal.position;
    let mut reports = Vec::with_capacity(ticks);
    for _ in 0..ticks {
        let world = session.world();
        let deadband = world.config().physics.move_speed / 2.0;
        let input = InputSnapshot::toward(world.body().position, goal, world.mode(), deadband);
        match session.step(&input) {
            Some(report) => reports.push(report),
            None => break,
        }
    }
    reports
}

/// Feeds `input` to the session `ticks` times and returns the last report.
pub fn hold(session: &mut Session, input: InputSnapshot, ticks: usize) -> Option<TickReport> {
    let mut last = None;
    for _ in 0..ticks {
        last = session.step(&input).or(last);
    }
    last
}
