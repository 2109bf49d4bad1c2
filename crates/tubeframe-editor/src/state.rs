//! Editor application state
//!
//! `AppState` is a plain value: cloning it snapshots the whole editor, and
//! the reducer in `action` produces new values instead of mutating in place.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tubeframe_core::{DEFAULT_SNAP_THRESHOLD, Workspace};

/// Zoom step applied to the eye-to-target distance
const ZOOM_IN_FACTOR: f32 = 0.9;
const ZOOM_OUT_FACTOR: f32 = 1.1;

/// Shading mode for tube display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Solid,
    Wireframe,
    Both,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Solid => "Solid",
            ViewMode::Wireframe => "Wireframe",
            ViewMode::Both => "Solid + Wireframe",
        }
    }
}

/// Camera control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Orbit,
    FirstPerson,
    TopDown,
}

impl CameraMode {
    pub fn name(&self) -> &'static str {
        match self {
            CameraMode::Orbit => "Orbit",
            CameraMode::FirstPerson => "First Person",
            CameraMode::TopDown => "Top Down",
        }
    }
}

/// Viewport display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// Shading mode
    pub view_mode: ViewMode,
    /// Whether the ground grid is drawn
    pub show_grid: bool,
    /// Whether the world axes are drawn
    pub show_axes: bool,
    /// Whether joints are highlighted
    pub show_joint_highlights: bool,
    /// Whether dimension labels are drawn
    pub show_dimensions: bool,
    /// Background clear color (RGBA)
    pub background: [f32; 4],
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            show_grid: true,
            show_axes: true,
            show_joint_highlights: true,
            show_dimensions: false,
            background: [0.102, 0.102, 0.102, 1.0],
        }
    }
}

/// Camera placement and projection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Eye position
    pub position: Vec3,
    /// Look-at target
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Control mode
    pub mode: CameraMode,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(300.0, 300.0, 300.0),
            target: Vec3::ZERO,
            fov: 50.0,
            near: 0.1,
            far: 2000.0,
            mode: CameraMode::default(),
        }
    }
}

impl CameraSettings {
    /// Move the eye 10% closer to the target
    pub fn zoom_in(&mut self) {
        self.position = self.target + (self.position - self.target) * ZOOM_IN_FACTOR;
    }

    /// Move the eye 10% further from the target
    pub fn zoom_out(&mut self) {
        self.position = self.target + (self.position - self.target) * ZOOM_OUT_FACTOR;
    }
}

/// Application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Current workspace
    pub workspace: Workspace,
    /// Currently selected tube
    pub selected_tube: Option<Uuid>,
    /// Currently selected joint
    pub selected_joint: Option<Uuid>,
    /// Viewport display settings
    pub view: ViewSettings,
    /// Camera settings
    pub camera: CameraSettings,
    /// Snap rotations to standard angles
    pub snap_to_angle: bool,
    /// Snap threshold in degrees
    pub snap_threshold: f32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            workspace: Workspace::default(),
            selected_tube: None,
            selected_joint: None,
            view: ViewSettings::default(),
            camera: CameraSettings::default(),
            snap_to_angle: true,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }
}
