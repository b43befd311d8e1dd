//! One-sided landing on floors.

use crate::body::Body;
use crate::config::PhysicsConfig;
use crate::map::Floor;
use crate::Mode;

fn within(value: f32, low: f32, high: f32) -> bool {
    value >= low && value <= high
}

/// Returns `true` if a descending body at its current position would land on
/// `floor`.
///
/// The body's centre must lie inside the floor's footprint widened by the
/// configured margins (depth is ignored in planar mode), and its lowest
/// point must lie between the floor's top face and a band below the floor's
/// bottom face.
#[must_use]
pub fn catches(body: &Body, floor: &Floor, mode: Mode, config: &PhysicsConfig) -> bool {
    let min = floor.bounds.min;
    let max = floor.bounds.max;
    let pos = body.position;
    let in_x = within(pos.x, min.x - config.floor_margin_x, max.x + config.floor_margin_x);
    let in_z = mode.is_planar()
        || within(pos.z, min.z - config.floor_margin_z, max.z + config.floor_margin_z);
    in_x && in_z && within(body.bottom(), min.y - config.floor_snap_band, max.y)
}

/// Snaps a descending body onto the first floor that catches it.
///
/// Floors are tried in list order and the first match wins. On landing the
/// body rests exactly on the floor's top face with zero vertical velocity.
/// In planar mode the body also takes the floor's reference depth, so a
/// floor drawn far behind the plane still holds the body once it is visually
/// aligned.
///
/// Returns the index of the floor landed on.
pub fn snap_to_floor(
    body: &mut Body,
    floors: &[Floor],
    mode: Mode,
    config: &PhysicsConfig,
) -> Option<usize> {
    if body.velocity.y > 0.0 {
        return None;
    }
    let (index, floor) = floors
        .iter()
        .enumerate()
        .find(|(_, floor)| catches(body, floor, mode, config))?;

    body.position.y = floor.bounds.max.y + body.radius();
    body.velocity.y = 0.0;
    body.grounded = true;
    if mode.is_planar() {
        body.position.z = floor.reference_depth;
    }
    Some(index)
}
