//! Editor actions and the state reducer
//!
//! Every state change goes through [`AppState::apply`]: the current state is
//! never mutated, a failed action leaves it untouched, and a successful one
//! yields the next state ready for snapshotting.

use glam::Vec3;
use uuid::Uuid;

use tubeframe_core::{
    Joint, JointKind, JointPreview, Tube, TubeKind, TubeParameters, WorkspaceError, snap_rotation,
};

use crate::state::{AppState, CameraSettings, ViewSettings};

/// Actions that can be performed on the app state
#[derive(Debug, Clone)]
pub enum Action {
    // Tube actions
    /// Add a tube to the workspace
    AddTube(Tube),
    /// Remove a tube along with its joints, detaching its children
    RemoveTube { id: Uuid },
    /// Change a tube's kind
    SetTubeKind { id: Uuid, kind: TubeKind },
    /// Change a tube's cross-section and length parameters
    SetTubeParameters {
        id: Uuid,
        parameters: TubeParameters,
    },
    /// Change a tube's display color
    SetTubeColor { id: Uuid, color: [f32; 4] },
    /// Show or hide a tube
    SetTubeVisible { id: Uuid, visible: bool },
    /// Move a tube and its descendants to a new position
    MoveTube { id: Uuid, position: Vec3 },
    /// Rotate a tube (snapped to standard angles when snapping is on)
    RotateTube { id: Uuid, rotation: Vec3 },

    // Selection actions
    /// Select a tube, clearing any joint selection
    SelectTube { id: Uuid },
    /// Clear the tube selection
    DeselectTube,
    /// Select a joint, clearing any tube selection
    SelectJoint { id: Uuid },
    /// Clear the joint selection
    DeselectJoint,

    // Joint actions
    /// Create a joint from a detection preview, re-parenting the child tube
    /// onto the preview's parent and moving it to the preview position
    CreateJointFromPreview { child: Uuid, preview: JointPreview },
    /// Change a joint's kind
    SetJointKind { id: Uuid, kind: JointKind },
    /// Change a joint's angle in degrees
    SetJointAngle { id: Uuid, angle: f32 },
    /// Remove a joint, detaching the child it connected
    RemoveJoint { id: Uuid },

    // View actions
    /// Replace the viewport display settings
    SetViewSettings(ViewSettings),
    /// Replace the camera settings
    SetCameraSettings(CameraSettings),
    /// Reset the camera to its default placement
    ResetView,

    // Workspace actions
    /// Enable or disable angle snapping
    SetSnapToAngle { enabled: bool },
    /// Remove all tubes and joints
    ClearWorkspace,
    /// Apply several actions as a single state transition
    Batch(Vec<Action>),
}

impl AppState {
    /// Apply an action, producing the next state.
    ///
    /// A `Batch` is atomic: if any contained action fails, the whole
    /// transition fails and the current state stands.
    pub fn apply(&self, action: &Action) -> Result<AppState, StateError> {
        let mut next = self.clone();
        next.apply_mut(action)?;
        next.sync_selection_flags();
        Ok(next)
    }

    fn apply_mut(&mut self, action: &Action) -> Result<(), StateError> {
        match action {
            Action::AddTube(tube) => {
                self.workspace.add_tube(tube.clone());
            }
            Action::RemoveTube { id } => {
                self.workspace
                    .remove_tube(*id)
                    .map_err(|_| StateError::TubeNotFound(*id))?;
                if self.selected_tube == Some(*id) {
                    self.selected_tube = None;
                }
                // The joint cascade can take the selected joint with it
                if let Some(joint_id) = self.selected_joint
                    && self.workspace.get_joint(joint_id).is_none()
                {
                    self.selected_joint = None;
                }
            }
            Action::SetTubeKind { id, kind } => {
                self.tube_mut(*id)?.kind = *kind;
            }
            Action::SetTubeParameters { id, parameters } => {
                self.tube_mut(*id)?.parameters = *parameters;
            }
            Action::SetTubeColor { id, color } => {
                self.tube_mut(*id)?.color = *color;
            }
            Action::SetTubeVisible { id, visible } => {
                self.tube_mut(*id)?.visible = *visible;
            }
            Action::MoveTube { id, position } => {
                let current = self.tube_mut(*id)?.position;
                self.workspace.translate_tube(*id, *position - current)?;
            }
            Action::RotateTube { id, rotation } => {
                let rotation = if self.snap_to_angle {
                    snap_rotation(*rotation, self.snap_threshold)
                } else {
                    *rotation
                };
                self.tube_mut(*id)?.rotation = rotation;
            }
            Action::SelectTube { id } => {
                if self.workspace.get_tube(*id).is_none() {
                    return Err(StateError::TubeNotFound(*id));
                }
                self.selected_tube = Some(*id);
                self.selected_joint = None;
            }
            Action::DeselectTube => {
                self.selected_tube = None;
            }
            Action::SelectJoint { id } => {
                if self.workspace.get_joint(*id).is_none() {
                    return Err(StateError::JointNotFound(*id));
                }
                self.selected_joint = Some(*id);
                self.selected_tube = None;
            }
            Action::DeselectJoint => {
                self.selected_joint = None;
            }
            Action::CreateJointFromPreview { child, preview } => {
                let current = self
                    .workspace
                    .get_tube(*child)
                    .map(|t| t.position)
                    .ok_or(StateError::TubeNotFound(*child))?;
                self.workspace.connect(Joint::from_preview(*child, preview))?;
                self.workspace
                    .translate_tube(*child, preview.position - current)?;
            }
            Action::SetJointKind { id, kind } => {
                self.joint_mut(*id)?.kind = *kind;
            }
            Action::SetJointAngle { id, angle } => {
                self.joint_mut(*id)?.angle = *angle;
            }
            Action::RemoveJoint { id } => {
                self.workspace.remove_joint(*id)?;
                if self.selected_joint == Some(*id) {
                    self.selected_joint = None;
                }
            }
            Action::SetViewSettings(view) => {
                self.view = view.clone();
            }
            Action::SetCameraSettings(camera) => {
                self.camera = camera.clone();
            }
            Action::ResetView => {
                self.camera = CameraSettings::default();
            }
            Action::SetSnapToAngle { enabled } => {
                self.snap_to_angle = *enabled;
            }
            Action::ClearWorkspace => {
                self.workspace.clear();
                self.selected_tube = None;
                self.selected_joint = None;
            }
            Action::Batch(actions) => {
                for action in actions {
                    self.apply_mut(action)?;
                }
            }
        }

        Ok(())
    }

    fn tube_mut(&mut self, id: Uuid) -> Result<&mut Tube, StateError> {
        self.workspace
            .get_tube_mut(id)
            .ok_or(StateError::TubeNotFound(id))
    }

    fn joint_mut(&mut self, id: Uuid) -> Result<&mut Joint, StateError> {
        self.workspace
            .get_joint_mut(id)
            .ok_or(StateError::JointNotFound(id))
    }

    /// Mirror the selection onto the per-entity flags renderers read
    fn sync_selection_flags(&mut self) {
        for tube in &mut self.workspace.tubes {
            tube.selected = self.selected_tube == Some(tube.id);
        }
        for joint in &mut self.workspace.joints {
            joint.selected = self.selected_joint == Some(joint.id);
        }
    }
}

/// State transition errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StateError {
    #[error("Tube not found: {0}")]
    TubeNotFound(Uuid),
    #[error("Joint not found: {0}")]
    JointNotFound(Uuid),
    #[error("No tube selected")]
    NoTubeSelected,
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubeframe_core::ContactData;

    fn preview_for(parent: Uuid, position: Vec3) -> JointPreview {
        JointPreview {
            parent_tube: parent,
            position,
            rotation: Vec3::ZERO,
            angle: 90.0,
            valid: true,
            contact: ContactData {
                points: vec![position],
                normal: Vec3::X,
            },
        }
    }

    fn state_with_tubes(count: usize) -> (AppState, Vec<Uuid>) {
        let mut state = AppState::new();
        let ids = (0..count)
            .map(|i| {
                state
                    .workspace
                    .add_tube(Tube::at(Vec3::new(i as f32 * 300.0, 0.0, 0.0)))
            })
            .collect();
        (state, ids)
    }

    #[test]
    fn test_apply_leaves_current_state_untouched() {
        let state = AppState::new();
        let next = state.apply(&Action::AddTube(Tube::new())).unwrap();

        assert!(state.workspace.is_empty());
        assert_eq!(next.workspace.tube_count(), 1);
    }

    #[test]
    fn test_select_tube_syncs_flags_and_clears_joint_selection() {
        let (mut state, ids) = state_with_tubes(2);
        state.selected_joint = Some(Uuid::new_v4());

        let next = state.apply(&Action::SelectTube { id: ids[0] }).unwrap();
        assert_eq!(next.selected_tube, Some(ids[0]));
        assert_eq!(next.selected_joint, None);
        assert!(next.workspace.get_tube(ids[0]).unwrap().selected);
        assert!(!next.workspace.get_tube(ids[1]).unwrap().selected);

        let next = next.apply(&Action::DeselectTube).unwrap();
        assert_eq!(next.selected_tube, None);
        assert!(!next.workspace.get_tube(ids[0]).unwrap().selected);
    }

    #[test]
    fn test_select_unknown_tube_fails() {
        let (state, _) = state_with_tubes(1);
        let result = state.apply(&Action::SelectTube { id: Uuid::new_v4() });
        assert!(matches!(result, Err(StateError::TubeNotFound(_))));
    }

    #[test]
    fn test_create_joint_reparents_and_moves_child() {
        let (state, ids) = state_with_tubes(2);
        let target = Vec3::new(10.0, 20.0, 30.0);

        let next = state
            .apply(&Action::CreateJointFromPreview {
                child: ids[1],
                preview: preview_for(ids[0], target),
            })
            .unwrap();

        assert_eq!(next.workspace.joint_count(), 1);
        assert_eq!(next.workspace.parent_of(ids[1]), Some(ids[0]));
        assert_eq!(next.workspace.get_tube(ids[1]).unwrap().position, target);
        let joint = &next.workspace.joints[0];
        assert_eq!(joint.angle, 90.0);
        assert_eq!(joint.position, target);
    }

    #[test]
    fn test_create_duplicate_joint_fails() {
        let (state, ids) = state_with_tubes(2);
        let action = Action::CreateJointFromPreview {
            child: ids[1],
            preview: preview_for(ids[0], Vec3::ZERO),
        };

        let next = state.apply(&action).unwrap();
        let result = next.apply(&action);
        assert!(matches!(
            result,
            Err(StateError::Workspace(WorkspaceError::DuplicateJoint(_, _)))
        ));
    }

    #[test]
    fn test_move_tube_carries_descendants() {
        let (state, ids) = state_with_tubes(2);
        let state = state
            .apply(&Action::CreateJointFromPreview {
                child: ids[1],
                preview: preview_for(ids[0], Vec3::new(0.0, 0.0, 110.0)),
            })
            .unwrap();

        let next = state
            .apply(&Action::MoveTube {
                id: ids[0],
                position: Vec3::new(100.0, 0.0, 0.0),
            })
            .unwrap();

        assert_eq!(
            next.workspace.get_tube(ids[0]).unwrap().position,
            Vec3::new(100.0, 0.0, 0.0)
        );
        // Child keeps its offset relative to the parent
        assert_eq!(
            next.workspace.get_tube(ids[1]).unwrap().position,
            Vec3::new(100.0, 0.0, 110.0)
        );
    }

    #[test]
    fn test_rotate_tube_snaps_when_enabled() {
        let (state, ids) = state_with_tubes(1);
        let rotation = Vec3::new(92.0_f32.to_radians(), 0.0, 0.0);

        let snapped = state
            .apply(&Action::RotateTube {
                id: ids[0],
                rotation,
            })
            .unwrap();
        let got = snapped.workspace.get_tube(ids[0]).unwrap().rotation;
        assert!((got.x - 90.0_f32.to_radians()).abs() < 1e-5);

        let free = state
            .apply(&Action::SetSnapToAngle { enabled: false })
            .unwrap()
            .apply(&Action::RotateTube {
                id: ids[0],
                rotation,
            })
            .unwrap();
        let got = free.workspace.get_tube(ids[0]).unwrap().rotation;
        assert!((got.x - rotation.x).abs() < 1e-6);
    }

    #[test]
    fn test_remove_tube_clears_stale_selections() {
        let (state, ids) = state_with_tubes(2);
        let state = state
            .apply(&Action::CreateJointFromPreview {
                child: ids[1],
                preview: preview_for(ids[0], Vec3::ZERO),
            })
            .unwrap();
        let joint_id = state.workspace.joints[0].id;
        let state = state.apply(&Action::SelectJoint { id: joint_id }).unwrap();

        let next = state.apply(&Action::RemoveTube { id: ids[0] }).unwrap();
        assert_eq!(next.workspace.tube_count(), 1);
        assert_eq!(next.workspace.joint_count(), 0);
        assert_eq!(next.selected_joint, None);
        assert_eq!(next.workspace.parent_of(ids[1]), None);
    }

    #[test]
    fn test_remove_joint_detaches_child() {
        let (state, ids) = state_with_tubes(2);
        let state = state
            .apply(&Action::CreateJointFromPreview {
                child: ids[1],
                preview: preview_for(ids[0], Vec3::ZERO),
            })
            .unwrap();
        let joint_id = state.workspace.joints[0].id;

        let next = state.apply(&Action::RemoveJoint { id: joint_id }).unwrap();
        assert_eq!(next.workspace.joint_count(), 0);
        assert_eq!(next.workspace.parent_of(ids[1]), None);
    }

    #[test]
    fn test_reset_view_restores_default_camera() {
        let state = AppState::new();
        let mut camera = CameraSettings::default();
        camera.zoom_in();
        camera.zoom_in();

        let moved = state.apply(&Action::SetCameraSettings(camera)).unwrap();
        assert_ne!(moved.camera, CameraSettings::default());

        let reset = moved.apply(&Action::ResetView).unwrap();
        assert_eq!(reset.camera, CameraSettings::default());
    }

    #[test]
    fn test_clear_workspace() {
        let (state, ids) = state_with_tubes(2);
        let state = state.apply(&Action::SelectTube { id: ids[0] }).unwrap();

        let next = state.apply(&Action::ClearWorkspace).unwrap();
        assert!(next.workspace.is_empty());
        assert_eq!(next.selected_tube, None);
    }

    #[test]
    fn test_batch_is_atomic() {
        let state = AppState::new();
        let tube = Tube::new();
        let batch = Action::Batch(vec![
            Action::AddTube(tube),
            Action::RemoveTube { id: Uuid::new_v4() },
        ]);

        let result = state.apply(&batch);
        assert!(matches!(result, Err(StateError::TubeNotFound(_))));
        assert!(state.workspace.is_empty());
    }

    #[test]
    fn test_batch_applies_in_order() {
        let state = AppState::new();
        let tube = Tube::new();
        let id = tube.id;
        let batch = Action::Batch(vec![
            Action::AddTube(tube),
            Action::SelectTube { id },
            Action::SetTubeColor {
                id,
                color: [1.0, 0.0, 0.0, 1.0],
            },
        ]);

        let next = state.apply(&batch).unwrap();
        assert_eq!(next.selected_tube, Some(id));
        assert_eq!(
            next.workspace.get_tube(id).unwrap().color,
            [1.0, 0.0, 0.0, 1.0]
        );
    }
}
