//! Tube definitions

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::BoundingBox;
use crate::constants::DEFAULT_TUBE_COLOR;

/// Cross-section kind of a tube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TubeKind {
    #[default]
    Rectangular,
    Square,
}

impl TubeKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TubeKind::Rectangular => "Rectangular",
            TubeKind::Square => "Square",
        }
    }

    /// All tube kinds for UI
    pub fn all() -> &'static [TubeKind] {
        &[TubeKind::Rectangular, TubeKind::Square]
    }
}

/// Outer dimensions and wall thickness of a tube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeParameters {
    /// Width of the tube (outer dimension)
    pub width: f32,
    /// Height of the tube (outer dimension)
    pub height: f32,
    /// Wall thickness of the tube
    pub thickness: f32,
    /// Length of the tube
    pub length: f32,
}

impl Default for TubeParameters {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            thickness: 5.0,
            length: 200.0,
        }
    }
}

impl TubeParameters {
    /// Validate the parameters: all dimensions positive, and the wall
    /// thickness less than half the smaller cross-section dimension.
    pub fn validate(&self) -> Result<(), TubeError> {
        if self.width <= 0.0 {
            return Err(TubeError::NonPositiveDimension("width"));
        }
        if self.height <= 0.0 {
            return Err(TubeError::NonPositiveDimension("height"));
        }
        if self.thickness <= 0.0 {
            return Err(TubeError::NonPositiveDimension("thickness"));
        }
        if self.length <= 0.0 {
            return Err(TubeError::NonPositiveDimension("length"));
        }
        let limit = self.width.min(self.height) / 2.0;
        if self.thickness >= limit {
            return Err(TubeError::WallTooThick {
                thickness: self.thickness,
                limit,
            });
        }
        Ok(())
    }

    /// Check whether the parameters are valid
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A rectangular or square structural tube in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tube {
    pub id: Uuid,
    /// Cross-section kind
    pub kind: TubeKind,
    /// Tube dimensions
    pub parameters: TubeParameters,
    /// Position in world space
    pub position: Vec3,
    /// Rotation as Euler XYZ angles in radians
    pub rotation: Vec3,
    /// Parent tube ID if this tube is connected to another
    pub parent: Option<Uuid>,
    /// Display color (RGBA)
    pub color: [f32; 4],
    /// Whether the tube is currently selected
    pub selected: bool,
    /// Whether the tube is visible
    pub visible: bool,
}

impl Default for Tube {
    fn default() -> Self {
        Self::new()
    }
}

impl Tube {
    /// Create a new tube with default parameters at the origin
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TubeKind::Rectangular,
            parameters: TubeParameters::default(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            parent: None,
            color: DEFAULT_TUBE_COLOR,
            selected: false,
            visible: true,
        }
    }

    /// Create a new tube at the given position
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Rotation as a quaternion
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// World-space direction of the tube's long axis (local +Z)
    pub fn axis(&self) -> Vec3 {
        self.rotation_quat() * Vec3::Z
    }

    /// Effective cross-section dimensions (width, height).
    ///
    /// Square tubes use the larger of width and height for both sides.
    pub fn cross_section(&self) -> (f32, f32) {
        match self.kind {
            TubeKind::Rectangular => (self.parameters.width, self.parameters.height),
            TubeKind::Square => {
                let side = self.parameters.width.max(self.parameters.height);
                (side, side)
            }
        }
    }

    /// Axis-aligned bounding box centered at the tube position.
    ///
    /// The box ignores the tube's rotation; half-extents are half the
    /// cross-section dimensions and half the length.
    pub fn bounding_box(&self) -> BoundingBox {
        let (width, height) = self.cross_section();
        BoundingBox::from_center_half_extents(
            self.position,
            Vec3::new(width, height, self.parameters.length) / 2.0,
        )
    }
}

/// Tube-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TubeError {
    #[error("Tube {0} must be positive")]
    NonPositiveDimension(&'static str),
    #[error("Wall thickness {thickness} must be less than half the smaller cross-section dimension ({limit})")]
    WallTooThick { thickness: f32, limit: f32 },
}
