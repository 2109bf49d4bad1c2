//! Angle snapping to standard joint angles

use glam::Vec3;

/// Standard joint angles in degrees, ascending
pub const STANDARD_ANGLES: [f32; 9] = [0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0];

/// Snap an angle to the nearest standard angle.
///
/// The input is normalized into `[0, 360)` before searching. If the nearest
/// standard angle is within `threshold` degrees of the normalized angle, that
/// standard angle is returned; otherwise the original (un-normalized) input
/// is returned unchanged. Distances are linear; 0 and 360 are not treated as
/// adjacent.
pub fn snap_angle(angle: f32, threshold: f32) -> f32 {
    let normalized = angle.rem_euclid(360.0);

    // First minimum wins on ties since the scan is ascending
    let mut nearest = STANDARD_ANGLES[0];
    let mut min_diff = (normalized - nearest).abs();
    for standard in STANDARD_ANGLES {
        let diff = (normalized - standard).abs();
        if diff < min_diff {
            min_diff = diff;
            nearest = standard;
        }
    }

    if min_diff <= threshold {
        nearest
    } else {
        angle
    }
}

/// Snap a rotation's Euler angles independently per axis.
///
/// Angles are in radians; the threshold is in degrees.
pub fn snap_rotation(rotation: Vec3, threshold: f32) -> Vec3 {
    Vec3::new(
        snap_angle(rotation.x.to_degrees(), threshold).to_radians(),
        snap_angle(rotation.y.to_degrees(), threshold).to_radians(),
        snap_angle(rotation.z.to_degrees(), threshold).to_radians(),
    )
}

/// Check whether an angle is within `threshold` degrees of a standard angle
pub fn is_near_standard(angle: f32, threshold: f32) -> bool {
    let normalized = angle.rem_euclid(360.0);
    STANDARD_ANGLES
        .iter()
        .any(|standard| (normalized - standard).abs() <= threshold)
}
