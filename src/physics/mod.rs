//! Discrete-step physics for the single controllable body.
//!
//! One call to [`step`] advances the body by one tick (`dt = 1`):
//!
//! 1. horizontal motion from input (or auto-run),
//! 2. gravity and vertical motion,
//! 3. penetration resolution against every obstacle in list order,
//! 4. landing on the first floor that catches a descending body,
//! 5. fall-out and goal checks.
//!
//! There is no swept collision: a body moving faster than an obstacle is
//! thick can tunnel through it.

mod collision;
mod floor;


pub use collision::{resolve_obstacle, Axis};
pub use floor::{catches, snap_to_floor};

use glam::{Vec2, Vec3};
use log::{debug, trace};

use crate::body::Body;
use crate::config::PhysicsConfig;
use crate::map::Map;
use crate::Mode;

/// What a single physics step observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The body ended the step supported.
    pub grounded: bool,
    /// The body dropped below the fall threshold.
    pub fell_out: bool,
    /// The body is within tolerance of the goal.
    pub reached_goal: bool,
}

/// Starts a jump if the body is grounded.
///
/// Returns `true` if the jump was taken. Requests while airborne, and in
/// chase mode when [`PhysicsConfig::planar_only_jump`] is set, are ignored.
pub fn try_jump(body: &mut Body, mode: Mode, config: &PhysicsConfig) -> bool {
    if !body.grounded || (config.planar_only_jump && !mode.is_planar()) {
        return false;
    }
    body.velocity.y = config.jump_power;
    body.grounded = false;
    true
}

/// Applies one tick of horizontal motion.
///
/// `axes` is the `(x, z)` direction from [`crate::InputSnapshot::movement_axes`].
/// In planar mode the body is first returned to the planar depth.
pub fn integrate_horizontal(body: &mut Body, mode: Mode, axes: Vec2, config: &PhysicsConfig) {
    if mode.is_planar() {
        body.position.z = config.planar_depth;
    }
    let (vx, vz) = match config.auto_run {
        Some(speed) => (speed, 0.0),
        None => (axes.x * config.move_speed, axes.y * config.move_speed),
    };
    body.velocity.x = vx;
    body.velocity.z = vz;
    body.position.x += vx;
    body.position.z += vz;
}

/// Applies gravity and moves the body vertically.
pub fn integrate_vertical(body: &mut Body, config: &PhysicsConfig) {
    body.velocity.y += config.gravity;
    body.position.y += body.velocity.y;
}

/// Advances `body` by one tick against `map`.
///
/// When `input_suspended` is set, horizontal velocity is zeroed and input is
/// ignored, but gravity and collision still run.
pub fn step(
    body: &mut Body,
    mode: Mode,
    axes: Vec2,
    input_suspended: bool,
    map: &Map,
    config: &PhysicsConfig,
    goal_tolerance: Vec3,
) -> StepReport {
    let was_grounded = body.grounded;

    if input_suspended {
        body.velocity.x = 0.0;
        body.velocity.z = 0.0;
    } else {
        integrate_horizontal(body, mode, axes, config);
    }
    integrate_vertical(body, config);

    body.grounded = false;
    for (index, obstacle) in map.obstacles.iter().enumerate() {
        if let Some(axis) = resolve_obstacle(body, obstacle, mode) {
            trace!("obstacle {index} resolved on {axis:?} at {}", body.position);
        }
    }

    if !body.grounded {
        if let Some(index) = snap_to_floor(body, &map.floors, mode, config) {
            if !was_grounded {
                debug!("landed on floor {index} at {}", body.position);
            }
        }
    }

    StepReport {
        grounded: body.grounded,
        fell_out: body.position.y < config.fall_threshold,
        reached_goal: map.goal.contains(body.position, goal_tolerance),
    }
}
