//! Scripted runs over the built-in course.

use approx::assert_relative_eq;
use glam::Vec3;
use parallax::{EpisodeOutcome, InputSnapshot, Map, Mode, Session, TickReport};
use rstest::rstest;
use test_utils::fixtures::{config_in, hold, jump};

fn session_at(mode: Mode, position: Vec3) -> Session {
    let mut session = Session::new(config_in(mode), Map::course());
    session.world_mut().body_mut().position = position;
    session
}

/// Holds the key that moves along +X in `mode`.
const fn forward(mode: Mode) -> InputSnapshot {
    match mode {
        Mode::Planar => InputSnapshot {
            right: true,
            ..InputSnapshot::IDLE
        },
        Mode::Chase => InputSnapshot {
            up: true,
            ..InputSnapshot::IDLE
        },
    }
}

fn last(report: Option<TickReport>) -> TickReport {
    report.unwrap_or_else(|| panic!("session ended early"))
}

#[rstest]
#[case::planar(Mode::Planar)]
#[case::chase(Mode::Chase)]
fn wall_stops_a_walking_body(#[case] mode: Mode) {
    let mut session = session_at(mode, Vec3::new(12.0, 0.5, 0.0));
    let report = last(hold(&mut session, forward(mode), 30));

    assert_relative_eq!(report.body_position.x, 13.25, epsilon = 1e-4);
    assert_relative_eq!(report.body_position.y, 0.5, epsilon = 1e-5);
    assert!(report.grounded);
    assert_eq!(report.outcome, EpisodeOutcome::Ongoing);
}

#[test]
fn jump_clears_the_wall() {
    let mode = Mode::Chase;
    let mut session = session_at(mode, Vec3::new(12.0, 0.5, 0.0));
    let run = forward(mode);
    let takeoff = hold(&mut session, InputSnapshot { up: true, ..jump() }, 1);
    assert!(last(takeoff).body_position.y > 0.5, "jump should leave the ground");
    let report = last(hold(&mut session, run, 49));

    assert!(report.body_position.x > 14.75, "body stuck at {}", report.body_position);
    assert_relative_eq!(report.body_position.y, 0.5, epsilon = 1e-5);
    assert!(report.grounded);
}

#[rstest]
#[case::planar_hits_pillar(Mode::Planar, 5.25)]
#[case::chase_passes_behind(Mode::Chase, 7.5)]
fn pillar_blocks_only_when_depth_is_ignored(#[case] mode: Mode, #[case] expected_x: f32) {
    let mut session = session_at(mode, Vec3::new(4.5, 0.5, 0.0));
    let report = last(hold(&mut session, forward(mode), 30));
    assert_relative_eq!(report.body_position.x, expected_x, epsilon = 1e-4);
}

#[test]
fn chase_body_falls_through_the_depth_gap() {
    let mode = Mode::Chase;
    let mut session = session_at(mode, Vec3::new(21.0, 0.5, 0.0));
    let report = last(hold(&mut session, forward(mode), 100));
    assert_eq!(report.outcome, EpisodeOutcome::FellOut);
    assert!(report.body_position.y < -10.0);
}

#[test]
fn planar_body_crosses_the_depth_gap() {
    let mode = Mode::Planar;
    let mut session = session_at(mode, Vec3::new(21.0, 0.5, 0.0));
    let report = last(hold(&mut session, forward(mode), 40));

    assert_eq!(report.outcome, EpisodeOutcome::Ongoing);
    assert!(report.grounded);
    assert_relative_eq!(report.body_position.y, 0.5, epsilon = 1e-5);
    assert_relative_eq!(report.body_position.z, -20.0);
}
