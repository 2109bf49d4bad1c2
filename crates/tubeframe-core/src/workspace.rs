//! Workspace (tube graph) for frame structures

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::joint::Joint;
use crate::tube::Tube;

/// Editable collection of tubes and the joints connecting them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// All tubes, in insertion order
    pub tubes: Vec<Tube>,
    /// All joints, in creation order
    pub joints: Vec<Joint>,
}

impl Workspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    // ============== Tube Management ==============

    /// Add a tube to the workspace
    pub fn add_tube(&mut self, tube: Tube) -> Uuid {
        let id = tube.id;
        self.tubes.push(tube);
        id
    }

    /// Get a tube by ID
    pub fn get_tube(&self, id: Uuid) -> Option<&Tube> {
        self.tubes.iter().find(|t| t.id == id)
    }

    /// Get a mutable tube by ID
    pub fn get_tube_mut(&mut self, id: Uuid) -> Option<&mut Tube> {
        self.tubes.iter_mut().find(|t| t.id == id)
    }

    /// Remove a tube along with every joint that references it.
    ///
    /// Children of the removed tube are detached and become roots; they are
    /// not deleted.
    pub fn remove_tube(&mut self, id: Uuid) -> Result<Tube, WorkspaceError> {
        let index = self
            .tubes
            .iter()
            .position(|t| t.id == id)
            .ok_or(WorkspaceError::TubeNotFound(id))?;

        let tube = self.tubes.remove(index);
        self.joints
            .retain(|j| j.parent_tube != id && j.child_tube != id);
        for child in self.tubes.iter_mut().filter(|t| t.parent == Some(id)) {
            child.parent = None;
        }

        Ok(tube)
    }

    /// Move a tube and all of its descendants by the same offset
    pub fn translate_tube(&mut self, id: Uuid, delta: Vec3) -> Result<(), WorkspaceError> {
        if self.get_tube(id).is_none() {
            return Err(WorkspaceError::TubeNotFound(id));
        }

        let mut group = self.descendants_of(id);
        group.push(id);
        for tube in self.tubes.iter_mut().filter(|t| group.contains(&t.id)) {
            tube.position += delta;
        }

        Ok(())
    }

    // ============== Joint Management ==============

    /// Connect two tubes with a joint.
    ///
    /// The joint's child tube is re-parented onto the joint's parent tube;
    /// an existing parent link is overwritten. Joints between the same pair
    /// of tubes (in either order) and connections that would make a tube its
    /// own ancestor are rejected.
    pub fn connect(&mut self, joint: Joint) -> Result<Uuid, WorkspaceError> {
        let parent_id = joint.parent_tube;
        let child_id = joint.child_tube;

        // Validate tubes exist
        if self.get_tube(parent_id).is_none() {
            return Err(WorkspaceError::TubeNotFound(parent_id));
        }
        if self.get_tube(child_id).is_none() {
            return Err(WorkspaceError::TubeNotFound(child_id));
        }

        if parent_id == child_id {
            return Err(WorkspaceError::SelfJoint(parent_id));
        }
        if self.find_joint_between(parent_id, child_id).is_some() {
            tracing::warn!("Tubes {parent_id} and {child_id} are already joined");
            return Err(WorkspaceError::DuplicateJoint(parent_id, child_id));
        }
        if self.would_create_cycle(parent_id, child_id) {
            tracing::warn!("Joint {parent_id} -> {child_id} would create a cycle");
            return Err(WorkspaceError::WouldCreateCycle);
        }

        let joint_id = joint.id;
        self.joints.push(joint);
        if let Some(child) = self.get_tube_mut(child_id) {
            child.parent = Some(parent_id);
        }

        Ok(joint_id)
    }

    /// Remove a joint by ID.
    ///
    /// If the joint carried the child's parent link, the child is detached
    /// and becomes a root.
    pub fn remove_joint(&mut self, id: Uuid) -> Result<Joint, WorkspaceError> {
        let index = self
            .joints
            .iter()
            .position(|j| j.id == id)
            .ok_or(WorkspaceError::JointNotFound(id))?;

        let joint = self.joints.remove(index);
        if let Some(child) = self.get_tube_mut(joint.child_tube)
            && child.parent == Some(joint.parent_tube)
        {
            child.parent = None;
        }

        Ok(joint)
    }

    /// Get a joint by ID
    pub fn get_joint(&self, id: Uuid) -> Option<&Joint> {
        self.joints.iter().find(|j| j.id == id)
    }

    /// Get a mutable joint by ID
    pub fn get_joint_mut(&mut self, id: Uuid) -> Option<&mut Joint> {
        self.joints.iter_mut().find(|j| j.id == id)
    }

    /// Find the joint connecting two tubes, in either order
    pub fn find_joint_between(&self, a: Uuid, b: Uuid) -> Option<&Joint> {
        self.joints.iter().find(|j| j.connects(a, b))
    }

    /// Get all joints that reference a tube
    pub fn joints_for_tube(&self, id: Uuid) -> Vec<&Joint> {
        self.joints
            .iter()
            .filter(|j| j.parent_tube == id || j.child_tube == id)
            .collect()
    }

    // ============== Tree Queries ==============

    /// Get the parent tube ID of a tube
    pub fn parent_of(&self, id: Uuid) -> Option<Uuid> {
        self.get_tube(id).and_then(|t| t.parent)
    }

    /// Get the direct children of a tube
    pub fn children_of(&self, id: Uuid) -> Vec<Uuid> {
        self.tubes
            .iter()
            .filter(|t| t.parent == Some(id))
            .map(|t| t.id)
            .collect()
    }

    /// Get all descendant tube IDs, breadth-first
    pub fn descendants_of(&self, id: Uuid) -> Vec<Uuid> {
        let mut result = self.children_of(id);
        let mut i = 0;
        while i < result.len() {
            result.extend(self.children_of(result[i]));
            i += 1;
        }
        result
    }

    /// Get all root tubes (tubes without parents)
    pub fn roots(&self) -> Vec<Uuid> {
        self.tubes
            .iter()
            .filter(|t| t.parent.is_none())
            .map(|t| t.id)
            .collect()
    }

    /// Check if a tube is an ancestor of another
    pub fn is_ancestor(&self, ancestor_id: Uuid, descendant_id: Uuid) -> bool {
        let mut current = self.parent_of(descendant_id);
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    /// Check if connecting parent to child would create a cycle
    fn would_create_cycle(&self, parent_id: Uuid, child_id: Uuid) -> bool {
        // Check if child is an ancestor of parent
        let mut current = Some(parent_id);
        while let Some(id) = current {
            if id == child_id {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    // ============== Counts and Validation ==============

    /// Count total number of tubes
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    /// Count total number of joints
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Check if the workspace is empty
    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty() && self.joints.is_empty()
    }

    /// Remove all tubes and joints
    pub fn clear(&mut self) {
        self.tubes.clear();
        self.joints.clear();
    }

    /// Validate the workspace
    pub fn validate(&self) -> Result<(), Vec<WorkspaceError>> {
        let mut errors = Vec::new();

        // Check joint references
        for joint in &self.joints {
            if self.get_tube(joint.parent_tube).is_none() {
                errors.push(WorkspaceError::InvalidJointReference(
                    joint.id,
                    joint.parent_tube,
                ));
            }
            if self.get_tube(joint.child_tube).is_none() {
                errors.push(WorkspaceError::InvalidJointReference(
                    joint.id,
                    joint.child_tube,
                ));
            }
        }

        // Check parent links
        for tube in &self.tubes {
            if let Some(parent) = tube.parent
                && self.get_tube(parent).is_none()
            {
                errors.push(WorkspaceError::DanglingParent(tube.id, parent));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Workspace-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Tube not found: {0}")]
    TubeNotFound(Uuid),
    #[error("Joint not found: {0}")]
    JointNotFound(Uuid),
    #[error("Cannot joint a tube to itself: {0}")]
    SelfJoint(Uuid),
    #[error("Tubes {0} and {1} are already joined")]
    DuplicateJoint(Uuid, Uuid),
    #[error("Connection would create a cycle")]
    WouldCreateCycle,
    #[error("Invalid joint reference: joint {0} references non-existent tube {1}")]
    InvalidJointReference(Uuid, Uuid),
    #[error("Tube {0} references missing parent {1}")]
    DanglingParent(Uuid, Uuid),
}
