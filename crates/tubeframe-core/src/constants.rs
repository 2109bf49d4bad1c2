//! Global constants for tubeframe-core

/// Distance below which two tube bounding boxes are considered touching
pub const CONTACT_EPSILON: f32 = 0.1;

/// Default distance threshold for joint detection
pub const DEFAULT_DETECTION_THRESHOLD: f32 = 20.0;

/// Default angle snapping threshold in degrees
pub const DEFAULT_SNAP_THRESHOLD: f32 = 5.0;

/// Default color for tubes (blue, RGBA)
pub const DEFAULT_TUBE_COLOR: [f32; 4] = [0.29, 0.565, 0.886, 1.0];
