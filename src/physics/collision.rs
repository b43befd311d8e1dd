//! Minimum-penetration resolution against solid obstacles.

use crate::body::Body;
use crate::map::Obstacle;
use crate::Mode;

/// World axis along which an overlap was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis shared by both modes.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis, only resolved in chase mode.
    Z,
}

/// Pushes `body` out of `obstacle` along the shallowest axis.
///
/// In planar mode the depth axis always counts as overlapping and is never
/// chosen for resolution. The winning axis is the smallest of the per-axis
/// minimum depths; ties go to Y, then X, then Z. Only the winning axis is
/// corrected, and its velocity component is zeroed. Landing on the top face
/// marks the body grounded.
///
/// Returns the resolved axis, or `None` when the boxes do not overlap.
pub fn resolve_obstacle(body: &mut Body, obstacle: &Obstacle, mode: Mode) -> Option<Axis> {
    let player = body.bounds();
    let solid = &obstacle.bounds;
    let overlap_z = mode.is_planar() || player.overlaps_z(solid);
    if !(player.overlaps_x(solid) && player.overlaps_y(solid) && overlap_z) {
        return None;
    }

    let depth = player.penetration(solid);
    let min_x = depth.min_x();
    let min_y = depth.min_y();
    let min_z = if mode.is_planar() {
        f32::INFINITY
    } else {
        depth.min_z()
    };
    let axis = if min_y <= min_x && min_y <= min_z {
        Axis::Y
    } else if min_x <= min_z {
        Axis::X
    } else {
        Axis::Z
    };
    let radius = body.radius();

    match axis {
        Axis::Y => {
            body.velocity.y = 0.0;
            if depth.top < depth.bottom {
                body.position.y = solid.max.y + radius;
                body.grounded = true;
            } else {
                body.position.y = solid.min.y - radius;
            }
        }
        Axis::X => {
            body.velocity.x = 0.0;
            body.position.x = if depth.left < depth.right {
                solid.min.x - radius
            } else {
                solid.max.x + radius
            };
        }
        Axis::Z => {
            body.velocity.z = 0.0;
            body.position.z = if depth.back < depth.front {
                solid.min.z - radius
            } else {
                solid.max.z + radius
            };
        }
    }
    Some(axis)
}
