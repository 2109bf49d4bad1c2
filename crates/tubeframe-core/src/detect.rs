//! Joint detection between the selected tube and nearby tubes

use glam::{EulerRot, Mat3, Quat, Vec3};
use uuid::Uuid;

use crate::joint::{ContactData, JointPreview};
use crate::proximity::{are_close, touch_point};
use crate::tube::Tube;

/// Compute joint previews between the selected tube and every other tube
/// whose bounding box is within `threshold` and in contact.
///
/// Pure function of its inputs: the same tubes, selection, and threshold
/// always produce the same previews, in tube order. No previews are produced
/// when nothing is selected or the selected ID is unknown.
pub fn joint_previews(tubes: &[Tube], selected: Option<Uuid>, threshold: f32) -> Vec<JointPreview> {
    let Some(selected_id) = selected else {
        return Vec::new();
    };
    let Some(selected_tube) = tubes.iter().find(|t| t.id == selected_id) else {
        return Vec::new();
    };

    let mut previews = Vec::new();
    for tube in tubes {
        if tube.id == selected_id {
            continue;
        }
        if !are_close(selected_tube, tube, threshold) {
            continue;
        }
        if let Some(position) = touch_point(selected_tube, tube) {
            previews.push(preview_between(selected_tube, tube, position));
        }
    }

    previews
}

/// Build a preview for a contact between the selected tube and another tube
fn preview_between(selected: &Tube, other: &Tube, position: Vec3) -> JointPreview {
    let selected_axis = selected.axis();
    let parent_axis = other.axis();

    let angle = selected_axis
        .dot(parent_axis)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();
    let normal = contact_normal(selected_axis, parent_axis);

    JointPreview {
        parent_tube: other.id,
        position,
        rotation: joint_frame(parent_axis, normal),
        angle,
        valid: true,
        contact: ContactData {
            points: vec![position],
            normal,
        },
    }
}

/// Normal of the contact plane: perpendicular to both tube axes, or an
/// arbitrary perpendicular of the first axis when the tubes are parallel
fn contact_normal(axis_a: Vec3, axis_b: Vec3) -> Vec3 {
    let cross = axis_a.cross(axis_b);
    if cross.length_squared() > 1e-6 {
        cross.normalize()
    } else {
        axis_a.any_orthonormal_vector()
    }
}

/// Euler XYZ angles of the joint frame whose Z axis is the parent tube's
/// axis and whose Y axis is the contact normal
fn joint_frame(parent_axis: Vec3, normal: Vec3) -> Vec3 {
    let z = parent_axis.normalize();
    let y = normal;
    let x = y.cross(z);
    let (rx, ry, rz) = Quat::from_mat3(&Mat3::from_cols(x, y, z)).to_euler(EulerRot::XYZ);
    Vec3::new(rx, ry, rz)
}
