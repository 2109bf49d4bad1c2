//! Tubeframe Core Data Structures
//!
//! This crate contains the core data structures for tube frame editing:
//! - Tube: rectangular or square tube with placement
//! - Joint: connection between two tubes
//! - Workspace: tube graph with parent/child structure
//! - Project: serializable project file
//!
//! Geometry helpers for bounding boxes, proximity, angle snapping, and
//! joint detection live here as well.

pub mod bounds;
pub mod constants;
pub mod detect;
pub mod joint;
pub mod project;
pub mod proximity;
pub mod snap;
pub mod tube;
pub mod workspace;

pub use bounds::*;
pub use constants::*;
pub use detect::*;
pub use joint::*;
pub use project::*;
pub use proximity::*;
pub use snap::*;
pub use tube::*;
pub use workspace::*;
