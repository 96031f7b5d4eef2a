// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editing session for a single project.
//!
//! The session works on its own copy of a project. Moves and zooms are
//! composed onto the current matrix and only accepted when the image still
//! covers the whole canvas; anything else leaves the state untouched. The
//! working copy reaches the project store only when the owner saves it.

use crate::models::project::Project;
use crate::state::reducer::{Action, Payload, Reducer, Store};
use crate::util::geometry::{compose, scale_about, translate_by, AffineMatrix};
use std::fmt;
use std::sync::Arc;

/// State of an editing session: the working copy of the project.
#[derive(Debug, Clone, PartialEq)]
pub struct EditingState {
    pub project: Arc<Project>,
}

impl EditingState {
    pub fn new(project: Arc<Project>) -> Self {
        Self { project }
    }
}

/// Translate the photo by (`dx`, `dy`) canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePhoto {
    pub dx: f64,
    pub dy: f64,
}

/// Zoom the photo by `scale` about the canvas centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePhoto {
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditingAction {
    MovePhoto(MovePhoto),
    ScalePhoto(ScalePhoto),
}

impl Action for EditingAction {
    fn action_type(&self) -> &'static str {
        match self {
            EditingAction::MovePhoto(_) => MovePhoto::TYPE,
            EditingAction::ScalePhoto(_) => ScalePhoto::TYPE,
        }
    }
}

impl fmt::Display for EditingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_type())
    }
}

impl Payload for MovePhoto {
    type Action = EditingAction;
    const TYPE: &'static str = "MOVE_PHOTO";

    fn into_action(self) -> EditingAction {
        EditingAction::MovePhoto(self)
    }

    fn matched(action: &EditingAction) -> Option<&Self> {
        match action {
            EditingAction::MovePhoto(payload) => Some(payload),
            _ => None,
        }
    }
}

impl Payload for ScalePhoto {
    type Action = EditingAction;
    const TYPE: &'static str = "SCALE_PHOTO";

    fn into_action(self) -> EditingAction {
        EditingAction::ScalePhoto(self)
    }

    fn matched(action: &EditingAction) -> Option<&Self> {
        match action {
            EditingAction::ScalePhoto(payload) => Some(payload),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EditingReducer;

impl EditingReducer {
    /// Accept `candidate` only if the image keeps covering the canvas.
    fn place(state: &EditingState, candidate: AffineMatrix) -> Option<EditingState> {
        let placed = state.project.with_matrix(candidate);
        if !placed.is_contained() {
            log::trace!("rejected placement {:?} for project {}", candidate, placed.id);
            return None;
        }
        Some(EditingState {
            project: Arc::new(placed),
        })
    }
}

impl Reducer for EditingReducer {
    type State = EditingState;
    type Action = EditingAction;

    fn reduce(&self, state: &EditingState, action: &EditingAction) -> Option<EditingState> {
        let project = &state.project;
        let candidate = match *action {
            EditingAction::MovePhoto(MovePhoto { dx, dy }) => {
                compose(&[translate_by(dx, dy), project.matrix])
            }
            EditingAction::ScalePhoto(ScalePhoto { scale }) => compose(&[
                scale_about(
                    scale,
                    project.canvas.width / 2.0,
                    project.canvas.height / 2.0,
                ),
                project.matrix,
            ]),
        };
        Self::place(state, candidate)
    }
}

/// A live editing session.
pub type EditingSession = Store<EditingReducer>;

/// Open an editing session on a copy of `project`.
pub fn open_session(project: Arc<Project>) -> EditingSession {
    Store::new(EditingReducer, EditingState::new(project))
}
