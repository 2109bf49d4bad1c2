//! Editor facade tying state, history, and joint detection together

use glam::Vec3;
use rand::Rng;
use uuid::Uuid;

use tubeframe_core::{DEFAULT_DETECTION_THRESHOLD, JointPreview, Tube, joint_previews};

use crate::action::{Action, StateError};
use crate::history::History;
use crate::state::AppState;

/// Half-extent of the random spawn cube for new tubes
const SPAWN_RANGE: f32 = 50.0;

/// Open interaction bracket; dirty once any action lands inside it
#[derive(Debug, Default)]
struct Interaction {
    dirty: bool,
}

/// Headless tube frame editor
///
/// Owns the current state, the undo history, and the joint previews derived
/// from the current selection. Continuous edits (drags, slider scrubs) are
/// bracketed with [`Editor::begin_interaction`] / [`Editor::end_interaction`]
/// so they collapse into a single history entry.
#[derive(Debug)]
pub struct Editor {
    /// Current application state
    state: AppState,
    /// Undo/redo snapshots
    history: History,
    /// Joint previews for the current selection
    previews: Vec<JointPreview>,
    /// Open interaction bracket, if any
    interaction: Option<Interaction>,
    /// Proximity threshold for joint detection
    pub detection_threshold: f32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Editor {
    /// Create an editor over an initial state
    pub fn new(state: AppState) -> Self {
        let history = History::new(state.clone());
        let mut editor = Self {
            state,
            history,
            previews: Vec::new(),
            interaction: None,
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
        };
        editor.refresh_previews();
        editor
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Joint previews between the selected tube and nearby tubes
    pub fn previews(&self) -> &[JointPreview] {
        &self.previews
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply an action to the current state.
    ///
    /// Outside an interaction every successful action records one history
    /// snapshot. Inside an interaction the state advances but nothing is
    /// recorded until `end_interaction`.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StateError> {
        self.state = self.state.apply(&action)?;
        tracing::debug!("Applied {:?}", action);

        match &mut self.interaction {
            Some(interaction) => interaction.dirty = true,
            None => self.history.record(self.state.clone()),
        }
        self.refresh_previews();

        Ok(())
    }

    /// Begin a continuous edit; a second `begin` without an `end` is ignored
    pub fn begin_interaction(&mut self) {
        if self.interaction.is_none() {
            self.interaction = Some(Interaction::default());
        }
    }

    /// End a continuous edit, recording one snapshot if anything changed
    pub fn end_interaction(&mut self) {
        if let Some(interaction) = self.interaction.take()
            && interaction.dirty
        {
            self.history.record(self.state.clone());
        }
    }

    /// Discard an open interaction, restoring the last recorded state
    pub fn cancel_interaction(&mut self) {
        if self.interaction.take().is_some() {
            self.state = self.history.current().clone();
            self.refresh_previews();
        }
    }

    /// Step back one history entry.
    ///
    /// An open interaction is cancelled first: its transient edits are
    /// discarded rather than committed. Returns `false` at the boundary.
    pub fn undo(&mut self) -> bool {
        self.cancel_interaction();
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        tracing::debug!("Undo");
        self.state = snapshot;
        self.refresh_previews();
        true
    }

    /// Step forward one history entry; `false` at the boundary
    pub fn redo(&mut self) -> bool {
        self.cancel_interaction();
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        tracing::debug!("Redo");
        self.state = snapshot;
        self.refresh_previews();
        true
    }

    /// Add a default tube at a random position near the origin
    pub fn add_tube(&mut self) -> Result<Uuid, StateError> {
        let mut rng = rand::rng();
        let position = Vec3::new(
            rng.random_range(-SPAWN_RANGE..SPAWN_RANGE),
            rng.random_range(-SPAWN_RANGE..SPAWN_RANGE),
            rng.random_range(-SPAWN_RANGE..SPAWN_RANGE),
        );

        let tube = Tube::at(position);
        let id = tube.id;
        self.dispatch(Action::AddTube(tube))?;
        Ok(id)
    }

    /// Create a joint between the selected tube and a preview's parent tube
    pub fn create_joint(&mut self, preview: JointPreview) -> Result<(), StateError> {
        let child = self.state.selected_tube.ok_or(StateError::NoTubeSelected)?;
        self.dispatch(Action::CreateJointFromPreview { child, preview })
    }

    /// Recompute joint previews from the current state
    fn refresh_previews(&mut self) {
        self.previews = joint_previews(
            &self.state.workspace.tubes,
            self.state.selected_tube,
            self.detection_threshold,
        );
    }
}
