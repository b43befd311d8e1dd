//! Camera blender: derives a camera pose from the body and the view mode.
//!
//! The blender is a two-state machine. While [`CameraState::Settled`] the
//! pose follows the body using the configuration for the settled mode. A
//! toggle moves it to [`CameraState::Transitioning`], during which position,
//! look target and field of view are interpolated between a far, narrow
//! side view and the chase view using a quadratic ease-in-out curve. The
//! blend is always rendered with a perspective projection; only once the
//! machine settles in planar mode does the pose switch to an orthographic
//! projection.
//!
//! Pose derivation is a pure function of the state, the body position and
//! the configuration ([`pose_for`]); [`CameraBlender::advance`] is the only
//! place the state changes.

use glam::{Mat4, Vec3};
use log::{debug, info};

use crate::config::CameraConfig;
use crate::vector_math::{ease_in_out_quad, lerp, lerp_vec3};
use crate::Mode;

/// How the scene is projected for a pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in degrees.
    Perspective {
        /// Vertical field of view in degrees.
        fov_degrees: f32,
    },
    /// Orthographic projection with a fixed vertical extent.
    Orthographic {
        /// Height of the view volume in world units.
        frustum_size: f32,
    },
}

/// Camera placement for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Projection to render with.
    pub projection: Projection,
}

impl CameraPose {
    /// World-to-view matrix with +Y up.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// View-to-clip matrix for a viewport with the given aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_degrees } => {
                Mat4::perspective_rh(fov_degrees.to_radians(), aspect, near, far)
            }
            Projection::Orthographic { frustum_size } => {
                let half_h = frustum_size / 2.0;
                let half_w = half_h * aspect;
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, near, far)
            }
        }
    }

    /// Field of view in degrees, or `None` for an orthographic pose.
    #[must_use]
    pub const fn fov_degrees(&self) -> Option<f32> {
        match self.projection {
            Projection::Perspective { fov_degrees } => Some(fov_degrees),
            Projection::Orthographic { .. } => None,
        }
    }
}

/// State of the camera blender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraState {
    /// Fixed at the configuration for the mode.
    Settled(Mode),
    /// Blending toward the configuration for `to`.
    Transitioning {
        /// Destination mode.
        to: Mode,
        /// Linear blend parameter in `[0, 1)`.
        progress: f32,
    },
}

/// Look target of the side view: the body's lateral coordinate on the
/// ground plane at zero depth.
fn side_target(anchor: Vec3) -> Vec3 {
    Vec3::new(anchor.x, 0.0, 0.0)
}

fn chase_target(anchor: Vec3, config: &CameraConfig) -> Vec3 {
    anchor + Vec3::new(config.look_ahead, 0.0, 0.0)
}

/// Pose for a camera settled in `mode`.
#[must_use]
pub fn settled_pose(mode: Mode, anchor: Vec3, config: &CameraConfig) -> CameraPose {
    match mode {
        Mode::Planar => CameraPose {
            position: Vec3::new(anchor.x, config.ortho.height, config.ortho.depth),
            target: side_target(anchor),
            projection: Projection::Orthographic {
                frustum_size: config.ortho.frustum_size,
            },
        },
        Mode::Chase => CameraPose {
            position: config.chase.position(anchor),
            target: chase_target(anchor, config),
            projection: Projection::Perspective {
                fov_degrees: config.chase.fov,
            },
        },
    }
}

/// Eased blend ratio between the side view (`0`) and the chase view (`1`).
#[must_use]
pub fn blend_ratio(to: Mode, progress: f32) -> f32 {
    let eased = ease_in_out_quad(progress);
    match to {
        Mode::Planar => 1.0 - eased,
        Mode::Chase => eased,
    }
}

/// Perspective pose interpolated between side and chase views.
#[must_use]
pub fn blended_pose(ratio: f32, anchor: Vec3, config: &CameraConfig) -> CameraPose {
    CameraPose {
        position: lerp_vec3(
            config.side.position(anchor),
            config.chase.position(anchor),
            ratio,
        ),
        target: lerp_vec3(side_target(anchor), chase_target(anchor, config), ratio),
        projection: Projection::Perspective {
            fov_degrees: lerp(config.side.fov, config.chase.fov, ratio),
        },
    }
}

/// Pose for `state` with the body at `anchor`.
#[must_use]
pub fn pose_for(state: CameraState, anchor: Vec3, config: &CameraConfig) -> CameraPose {
    match state {
        CameraState::Settled(mode) => settled_pose(mode, anchor, config),
        CameraState::Transitioning { to, progress } => {
            blended_pose(blend_ratio(to, progress), anchor, config)
        }
    }
}

/// Owner of the camera state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBlender {
    state: CameraState,
}

impl CameraBlender {
    /// Creates a blender settled in `mode`.
    #[must_use]
    pub const fn settled(mode: Mode) -> Self {
        Self {
            state: CameraState::Settled(mode),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> CameraState {
        self.state
    }

    /// Returns `true` while a blend is in flight.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        matches!(self.state, CameraState::Transitioning { .. })
    }

    /// Starts a blend away from `current`.
    ///
    /// Only one blend may be in flight: a request made while transitioning
    /// is dropped and `None` is returned. Otherwise the new mode is
    /// returned and the blend starts at `progress = 0`.
    pub fn request_toggle(&mut self, current: Mode) -> Option<Mode> {
        if self.is_transitioning() {
            debug!("mode toggle ignored: camera transition in flight");
            return None;
        }
        let to = current.toggled();
        self.state = CameraState::Transitioning { to, progress: 0.0 };
        info!("switching view {current} -> {to}");
        Some(to)
    }

    /// Advances an in-flight blend by one tick and returns the pose.
    ///
    /// When the blend parameter reaches `1` the machine settles in the
    /// destination mode and the settled pose is returned on that same tick.
    pub fn advance(&mut self, anchor: Vec3, config: &CameraConfig) -> CameraPose {
        if let CameraState::Transitioning { to, progress } = self.state {
            let next = progress + config.transition_step;
            self.state = if next >= 1.0 {
                debug!("camera settled in {to} view");
                CameraState::Settled(to)
            } else {
                CameraState::Transitioning { to, progress: next }
            };
        }
        pose_for(self.state, anchor, config)
    }
}
