//! Joint definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How two tubes are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JointKind {
    #[default]
    Butt,
    Miter,
    Custom,
}

impl JointKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            JointKind::Butt => "Butt",
            JointKind::Miter => "Miter",
            JointKind::Custom => "Custom",
        }
    }

    /// All joint kinds for UI
    pub fn all() -> &'static [JointKind] {
        &[JointKind::Butt, JointKind::Miter, JointKind::Custom]
    }
}

/// A joint connecting two tubes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub id: Uuid,
    /// Parent tube ID
    pub parent_tube: Uuid,
    /// Child tube ID
    pub child_tube: Uuid,
    /// Joint kind
    pub kind: JointKind,
    /// Angle between the tubes in degrees (nominally 0-180)
    pub angle: f32,
    /// Position of the joint in world space
    pub position: Vec3,
    /// Orientation of the joint frame as Euler XYZ angles in radians
    pub rotation: Vec3,
    /// Whether the joint is currently selected
    pub selected: bool,
    /// Whether the joint is visible
    pub visible: bool,
}

impl Joint {
    /// Create a new butt joint between two tubes with default values
    pub fn new(parent_tube: Uuid, child_tube: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_tube,
            child_tube,
            kind: JointKind::Butt,
            angle: 90.0,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            selected: false,
            visible: true,
        }
    }

    /// Create a joint from an accepted preview, connecting the preview's
    /// parent tube to the given child tube
    pub fn from_preview(child_tube: Uuid, preview: &JointPreview) -> Self {
        Self {
            angle: preview.angle,
            position: preview.position,
            rotation: preview.rotation,
            ..Self::new(preview.parent_tube, child_tube)
        }
    }

    /// Check whether this joint connects the given pair of tubes,
    /// in either order
    pub fn connects(&self, a: Uuid, b: Uuid) -> bool {
        (self.parent_tube == a && self.child_tube == b)
            || (self.parent_tube == b && self.child_tube == a)
    }
}

/// Candidate joint between the selected tube and another tube.
///
/// Previews are derived from the current tube positions and are never
/// stored in history or project files.
#[derive(Debug, Clone, PartialEq)]
pub struct JointPreview {
    /// ID of the parent tube (the non-selected tube)
    pub parent_tube: Uuid,
    /// Proposed joint position
    pub position: Vec3,
    /// Proposed joint frame as Euler XYZ angles in radians
    pub rotation: Vec3,
    /// Angle between the tubes in degrees
    pub angle: f32,
    /// Whether the preview is valid
    pub valid: bool,
    /// Contact geometry between the tubes
    pub contact: ContactData,
}

/// Geometric information about where two tubes touch
#[derive(Debug, Clone, PartialEq)]
pub struct ContactData {
    /// Points defining the contact region
    pub points: Vec<Vec3>,
    /// Normal vector of the contact plane
    pub normal: Vec3,
}
