//! Tuning constants shared by the physics engine and the camera blender.
//!
//! These are the defaults used to build [`crate::config::GameConfig`]. All
//! rates are expressed per tick; the simulation runs with an implicit
//! `dt = 1`.

/// Downward acceleration applied to the vertical velocity every tick.
pub const GRAVITY: f32 = -0.01;
/// Vertical velocity given to a grounded body when it jumps.
pub const JUMP_POWER: f32 = 0.2;
/// Collision radius of the controllable sphere.
pub const PLAYER_RADIUS: f32 = 0.25;
/// Distance travelled per tick along an input-driven axis.
pub const MOVE_SPEED: f32 = 0.1;
/// Constant X speed used when auto-run is enabled.
pub const AUTO_RUN_SPEED: f32 = 0.03;
/// Depth coordinate the body is locked to while in planar mode.
pub const PLANAR_DEPTH: f32 = 0.0;
/// Bodies below this height have fallen out of the level.
pub const FALL_THRESHOLD: f32 = -10.0;

/// Horizontal slack around a floor's footprint on the X axis.
pub const FLOOR_MARGIN_X: f32 = 0.2;
/// Depth slack around a floor's footprint on the Z axis (chase mode only).
pub const FLOOR_MARGIN_Z: f32 = 0.1;
/// How far below a floor's bottom face the body may sink and still land.
pub const FLOOR_SNAP_BAND: f32 = 0.5;

/// Upper bound of the projection gauge.
pub const GAUGE_MAX: f32 = 100.0;
/// Gauge drained per tick while in planar mode.
pub const GAUGE_DEPLETE_RATE: f32 = 1.0;
/// Gauge restored per tick while in chase mode.
pub const GAUGE_RECOVER_RATE: f32 = 1.0;

/// Blend parameter increment per tick while the camera is transitioning.
pub const TRANSITION_STEP: f32 = 0.03;
/// Field of view (degrees) of the side view used while blending.
pub const SIDE_VIEW_FOV: f32 = 3.3;
/// Camera depth of the side view used while blending.
pub const SIDE_VIEW_DEPTH: f32 = 100.0;
/// Field of view (degrees) of the chase view.
pub const CHASE_VIEW_FOV: f32 = 60.0;
/// Offset of the chase camera from the body, as `[x, y, z]`.
pub const CHASE_VIEW_OFFSET: [f32; 3] = [-6.0, 3.0, 0.0];
/// Distance ahead of the body, along +X, the chase camera looks at.
pub const CHASE_LOOK_AHEAD: f32 = 2.0;
/// Height of the settled orthographic camera.
pub const ORTHO_HEIGHT: f32 = 0.0;
/// Depth of the settled orthographic camera.
pub const ORTHO_DEPTH: f32 = 5.5;
/// Vertical extent of the orthographic frustum.
pub const ORTHO_FRUSTUM_SIZE: f32 = 5.8;
/// Near clipping plane shared by both projections.
pub const NEAR_PLANE: f32 = 0.1;
/// Far clipping plane shared by both projections.
pub const FAR_PLANE: f32 = 1000.0;

/// Spawn point of the body at the start of every episode.
pub const SPAWN_POSITION: [f32; 3] = [4.0, 1.5, 0.0];
/// Per-axis distance from the goal within which the goal counts as reached.
pub const GOAL_TOLERANCE: [f32; 3] = [0.5, 1.0, 1.0];
