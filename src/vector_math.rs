//! Interpolation helpers used by the camera blender.

use glam::Vec3;

/// Linearly interpolates between `a` and `b`.
///
/// `t` is not clamped; callers pass values in `[0, 1]`.
///
/// # Examples
/// ```
/// use parallax::vector_math::lerp;
/// assert!((lerp(3.3, 60.0, 0.5) - 31.65).abs() < 1e-4);
/// ```
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two vectors.
#[must_use]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// Quadratic ease-in-out curve.
///
/// Accelerates quadratically over the first half and decelerates with the
/// mirrored curve over the second half. The input is clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use parallax::ease_in_out_quad;
/// assert_eq!(ease_in_out_quad(0.0), 0.0);
/// assert_eq!(ease_in_out_quad(0.25), 0.125);
/// assert_eq!(ease_in_out_quad(0.5), 0.5);
/// assert_eq!(ease_in_out_quad(1.0), 1.0);
/// ```
#[must_use]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let clamped = t.clamp(0.0, 1.0);
    if clamped < 0.5 {
        2.0 * clamped * clamped
    } else {
        1.0 - (-2.0 * clamped + 2.0).powi(2) / 2.0
    }
}
