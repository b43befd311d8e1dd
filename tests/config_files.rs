//! Loading configuration and map files from disk.

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use glam::Vec3;
use parallax::{ConfigError, GameConfig, Map, MapError, Mode};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn dir() -> TempDir {
    tempfile::tempdir().unwrap_or_else(|e| panic!("temp dir: {e}"))
}

fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap_or_else(|e| panic!("writing {name}: {e}"));
    path
}

#[rstest]
fn partial_config_keeps_defaults(dir: TempDir) {
    let path = write(
        &dir,
        "game.json",
        r#"{
            "physics": { "gravity": -0.02, "auto_run": 0.03 },
            "episode": { "initial_mode": "chase" }
        }"#,
    );
    let config = GameConfig::load(&path).unwrap_or_else(|e| panic!("{e}"));
    let defaults = GameConfig::default();

    assert_relative_eq!(config.physics.gravity, -0.02);
    assert_eq!(config.physics.auto_run, Some(0.03));
    assert_relative_eq!(config.physics.jump_power, defaults.physics.jump_power);
    assert_eq!(config.episode.initial_mode, Mode::Chase);
    assert_eq!(config.camera, defaults.camera);
    assert_eq!(config.gauge, defaults.gauge);
}

#[rstest]
#[case::malformed("{ physics: ")]
#[case::wrong_type(r#"{ "gauge": { "max": "full" } }"#)]
fn unparsable_config_is_a_parse_error(dir: TempDir, #[case] text: &str) {
    let path = write(&dir, "bad.json", text);
    assert!(matches!(GameConfig::load(&path), Err(ConfigError::Parse(_))));
}

#[rstest]
fn out_of_range_config_is_rejected(dir: TempDir) {
    let path = write(&dir, "bad.json", r#"{ "camera": { "transition_step": 0.0 } }"#);
    assert!(matches!(
        GameConfig::load(&path),
        Err(ConfigError::Invalid { .. })
    ));
}

#[rstest]
fn missing_config_names_the_path(dir: TempDir) {
    let path = dir.path().join("absent.json");
    match GameConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[rstest]
fn map_file_round_trips_through_disk(dir: TempDir) {
    let course = Map::course();
    let text = serde_json::to_string_pretty(&course.to_spec())
        .unwrap_or_else(|e| panic!("serialising map: {e}"));
    let path = write(&dir, "course.json", &text);

    let loaded = Map::load(&path).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(loaded.floors.len(), course.floors.len());
    assert_eq!(loaded.obstacles.len(), course.obstacles.len());
    assert_eq!(loaded.goal, course.goal);
    for (a, b) in loaded.obstacles.iter().zip(&course.obstacles) {
        assert!(a.bounds.min.abs_diff_eq(b.bounds.min, 1e-5));
        assert!(a.bounds.max.abs_diff_eq(b.bounds.max, 1e-5));
    }
}

#[rstest]
fn flat_box_in_map_file_is_rejected(dir: TempDir) {
    let path = write(
        &dir,
        "flat.json",
        r#"{
            "floors": [{ "center": [0, 0, 0], "size": [4, 0, 10] }],
            "goal": [10, 0.7, 0]
        }"#,
    );
    match Map::load(&path) {
        Err(MapError::DegenerateBox { kind, index, size }) => {
            assert_eq!(kind, "floor");
            assert_eq!(index, 0);
            assert_eq!(size, Vec3::new(4.0, 0.0, 10.0));
        }
        other => panic!("expected a degenerate box, got {other:?}"),
    }
}
