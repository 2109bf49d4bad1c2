//! Proximity tests between tube bounding boxes

use glam::Vec3;

use crate::constants::CONTACT_EPSILON;
use crate::tube::Tube;

/// Closest points between two tube bounding boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Euclidean distance between the closest points
    pub distance: f32,
    /// Closest point on the first tube's box
    pub point_a: Vec3,
    /// Closest point on the second tube's box
    pub point_b: Vec3,
}

impl Contact {
    /// Midpoint of the two closest points
    pub fn midpoint(&self) -> Vec3 {
        (self.point_a + self.point_b) * 0.5
    }
}

/// Compute the closest points between two tubes' bounding boxes and the
/// distance between them.
///
/// The first box's closest point is found by clamping the other box's center
/// into it; the second box's closest point by clamping that point in turn.
/// Overlapping boxes always yield distance 0, and two tubes at the identical
/// position yield their shared center as both points.
pub fn distance_between(a: &Tube, b: &Tube) -> Contact {
    let box_a = a.bounding_box();
    let box_b = b.bounding_box();

    let point_a = box_a.clamp_point(box_b.center());
    let point_b = box_b.clamp_point(point_a);

    Contact {
        distance: point_a.distance(point_b),
        point_a,
        point_b,
    }
}

/// Check whether two tubes' bounding boxes are within `threshold` of
/// each other
pub fn are_close(a: &Tube, b: &Tube, threshold: f32) -> bool {
    distance_between(a, b).distance < threshold
}

/// Point where two tubes touch, if they are in contact.
///
/// Returns the midpoint of the closest points when the distance between the
/// boxes is below [`CONTACT_EPSILON`], `None` otherwise.
pub fn touch_point(a: &Tube, b: &Tube) -> Option<Vec3> {
    let contact = distance_between(a, b);
    if contact.distance < CONTACT_EPSILON {
        Some(contact.midpoint())
    } else {
        None
    }
}
