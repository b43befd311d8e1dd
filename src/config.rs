//! Runtime configuration for the physics engine, gauge and camera.
//!
//! Every section implements [`Default`] with the values in
//! [`crate::constants`] and is deserialised with `#[serde(default)]`, so a
//! JSON file only needs to name the fields it overrides:
//!
//! ```
//! use parallax::GameConfig;
//! let config = GameConfig::from_json_str(r#"{ "physics": { "move_speed": 0.05 } }"#).unwrap();
//! assert_eq!(config.physics.move_speed, 0.05);
//! assert_eq!(config.physics.jump_power, parallax::JUMP_POWER);
//! ```
//!
//! Validation happens here, when the configuration is built. The tick itself
//! assumes a valid configuration and never re-checks it.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    AUTO_RUN_SPEED, CHASE_LOOK_AHEAD, CHASE_VIEW_FOV, CHASE_VIEW_OFFSET, FALL_THRESHOLD,
    FAR_PLANE, FLOOR_MARGIN_X, FLOOR_MARGIN_Z, FLOOR_SNAP_BAND, GAUGE_DEPLETE_RATE, GAUGE_MAX,
    GAUGE_RECOVER_RATE, GOAL_TOLERANCE, GRAVITY, JUMP_POWER, MOVE_SPEED, NEAR_PLANE, ORTHO_DEPTH,
    ORTHO_FRUSTUM_SIZE, ORTHO_HEIGHT, PLANAR_DEPTH, PLAYER_RADIUS, SIDE_VIEW_DEPTH, SIDE_VIEW_FOV,
    SPAWN_POSITION, TRANSITION_STEP,
};
use crate::Mode;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration text was not valid JSON for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field held a value the engine cannot run with.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Per-tick motion parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to the vertical velocity every tick. Negative.
    pub gravity: f32,
    /// Vertical velocity set by a jump.
    pub jump_power: f32,
    /// Collision radius of the body.
    pub radius: f32,
    /// Displacement per tick along each input-driven axis.
    pub move_speed: f32,
    /// When set, the body moves along +X at this speed every tick regardless
    /// of input.
    pub auto_run: Option<f32>,
    /// Only allow jumping while the view is planar.
    pub planar_only_jump: bool,
    /// Depth the body is locked to in planar mode before floor snapping.
    pub planar_depth: f32,
    /// Height below which the body has fallen out.
    pub fall_threshold: f32,
    /// Floor footprint slack on X.
    pub floor_margin_x: f32,
    /// Floor footprint slack on Z (chase mode only).
    pub floor_margin_z: f32,
    /// Distance below a floor's bottom face that still counts as landing.
    pub floor_snap_band: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            radius: PLAYER_RADIUS,
            move_speed: MOVE_SPEED,
            auto_run: None,
            planar_only_jump: false,
            planar_depth: PLANAR_DEPTH,
            fall_threshold: FALL_THRESHOLD,
            floor_margin_x: FLOOR_MARGIN_X,
            floor_margin_z: FLOOR_MARGIN_Z,
            floor_snap_band: FLOOR_SNAP_BAND,
        }
    }
}

impl PhysicsConfig {
    /// Defaults with auto-run enabled at [`crate::AUTO_RUN_SPEED`].
    #[must_use]
    pub fn auto_running() -> Self {
        Self {
            auto_run: Some(AUTO_RUN_SPEED),
            ..Self::default()
        }
    }
}

/// Gauge drain and recovery rates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Upper bound and starting value.
    pub max: f32,
    /// Drained per tick in planar mode.
    pub deplete_rate: f32,
    /// Restored per tick in chase mode.
    pub recover_rate: f32,
    /// Freeze the gauge while the camera is transitioning.
    pub pause_during_transition: bool,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max: GAUGE_MAX,
            deplete_rate: GAUGE_DEPLETE_RATE,
            recover_rate: GAUGE_RECOVER_RATE,
            pause_during_transition: true,
        }
    }
}

/// One endpoint of a camera blend.
///
/// `offset` components flagged in `follow` are added to the body's
/// coordinate on that axis; the rest are absolute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Camera offset (or absolute coordinate, see `follow`).
    pub offset: Vec3,
    /// Which axes track the body, as `[x, y, z]`.
    pub follow: [bool; 3],
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl ViewConfig {
    /// Camera position for a body at `anchor`.
    #[must_use]
    pub fn position(&self, anchor: Vec3) -> Vec3 {
        let [fx, fy, fz] = self.follow;
        let pick = |follow: bool, body: f32, offset: f32| if follow { body + offset } else { offset };
        Vec3::new(
            pick(fx, anchor.x, self.offset.x),
            pick(fy, anchor.y, self.offset.y),
            pick(fz, anchor.z, self.offset.z),
        )
    }
}

/// Settled orthographic camera used in planar mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrthoConfig {
    /// Fixed camera height.
    pub height: f32,
    /// Fixed camera depth.
    pub depth: f32,
    /// Vertical extent of the view volume.
    pub frustum_size: f32,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        Self {
            height: ORTHO_HEIGHT,
            depth: ORTHO_DEPTH,
            frustum_size: ORTHO_FRUSTUM_SIZE,
        }
    }
}

/// Camera blender parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Blend parameter increment per tick. `1.0` swaps views instantly.
    pub transition_step: f32,
    /// Far side view the blend uses for the planar endpoint.
    pub side: ViewConfig,
    /// Trailing view used in chase mode.
    pub chase: ViewConfig,
    /// How far ahead of the body, along +X, the chase view looks.
    pub look_ahead: f32,
    /// Settled planar camera.
    pub ortho: OrthoConfig,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let [cx, cy, cz] = CHASE_VIEW_OFFSET;
        Self {
            transition_step: TRANSITION_STEP,
            side: ViewConfig {
                offset: Vec3::new(0.0, 0.0, SIDE_VIEW_DEPTH),
                follow: [true, false, false],
                fov: SIDE_VIEW_FOV,
            },
            chase: ViewConfig {
                offset: Vec3::new(cx, cy, cz),
                follow: [true, true, true],
                fov: CHASE_VIEW_FOV,
            },
            look_ahead: CHASE_LOOK_AHEAD,
            ortho: OrthoConfig::default(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

/// Episode start state and win condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Where the body spawns on reset.
    pub spawn: Vec3,
    /// View mode on reset.
    pub initial_mode: Mode,
    /// Per-axis distance from the goal that counts as arrival.
    pub goal_tolerance: Vec3,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::from_array(SPAWN_POSITION),
            initial_mode: Mode::Planar,
            goal_tolerance: Vec3::from_array(GOAL_TOLERANCE),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Body motion.
    pub physics: PhysicsConfig,
    /// Projection gauge.
    pub gauge: GaugeConfig,
    /// Camera blender.
    pub camera: CameraConfig,
    /// Episode start state.
    pub episode: EpisodeConfig,
}

fn require(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

impl GameConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails [`GameConfig::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`GameConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the invariants the tick relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        require(
            physics.radius.is_finite() && physics.radius > 0.0,
            "physics.radius",
            "must be positive",
        )?;
        require(physics.gravity < 0.0, "physics.gravity", "must be negative")?;
        require(physics.jump_power > 0.0, "physics.jump_power", "must be positive")?;
        require(physics.move_speed >= 0.0, "physics.move_speed", "must not be negative")?;
        require(
            physics.auto_run.is_none_or(|speed| speed.is_finite()),
            "physics.auto_run",
            "must be finite",
        )?;
        require(
            physics.floor_margin_x >= 0.0
                && physics.floor_margin_z >= 0.0
                && physics.floor_snap_band >= 0.0,
            "physics.floor_margin",
            "margins must not be negative",
        )?;

        let gauge = &self.gauge;
        require(
            gauge.max > 0.0 && gauge.max <= GAUGE_MAX,
            "gauge.max",
            "must be in (0, 100]",
        )?;
        require(gauge.deplete_rate >= 0.0, "gauge.deplete_rate", "must not be negative")?;
        require(gauge.recover_rate >= 0.0, "gauge.recover_rate", "must not be negative")?;

        let camera = &self.camera;
        require(
            camera.transition_step > 0.0 && camera.transition_step <= 1.0,
            "camera.transition_step",
            "must be in (0, 1]",
        )?;
        require(
            camera.side.fov > 0.0 && camera.side.fov < 180.0,
            "camera.side.fov",
            "must be in (0, 180) degrees",
        )?;
        require(
            camera.chase.fov > 0.0 && camera.chase.fov < 180.0,
            "camera.chase.fov",
            "must be in (0, 180) degrees",
        )?;
        require(
            camera.ortho.frustum_size > 0.0,
            "camera.ortho.frustum_size",
            "must be positive",
        )?;
        require(
            camera.near > 0.0 && camera.far > camera.near,
            "camera.near",
            "clip planes must satisfy 0 < near < far",
        )?;

        require(
            self.episode.goal_tolerance.cmpge(Vec3::ZERO).all(),
            "episode.goal_tolerance",
            "must not be negative",
        )
    }
}
