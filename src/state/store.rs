// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project collection state.
//!
//! Holds every project known to the editor in display order plus the id of
//! the project currently selected for editing.

use crate::models::project::Project;
use crate::state::reducer::{Action, Payload, Reducer, Store};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStoreState {
    pub projects: Vec<Arc<Project>>,
    /// Not cleared when the referenced project is deleted.
    pub active_project_id: Option<String>,
}

impl ProjectStoreState {
    pub fn find(&self, id: &str) -> Option<&Arc<Project>> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// The project the active pointer refers to, if it still exists.
    pub fn active_project(&self) -> Option<&Arc<Project>> {
        self.active_project_id.as_deref().and_then(|id| self.find(id))
    }
}

/// Merge projects into the collection, replacing same-id entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProjects {
    pub projects: Vec<Arc<Project>>,
}

/// Replace the project with the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProject {
    pub project: Arc<Project>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteProject {
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetActiveProject {
    pub active_project_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    AddProjects(AddProjects),
    UpdateProject(UpdateProject),
    DeleteProject(DeleteProject),
    SetActiveProject(SetActiveProject),
}

impl Action for StoreAction {
    fn action_type(&self) -> &'static str {
        match self {
            StoreAction::AddProjects(_) => AddProjects::TYPE,
            StoreAction::UpdateProject(_) => UpdateProject::TYPE,
            StoreAction::DeleteProject(_) => DeleteProject::TYPE,
            StoreAction::SetActiveProject(_) => SetActiveProject::TYPE,
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_type())
    }
}

impl Payload for AddProjects {
    type Action = StoreAction;
    const TYPE: &'static str = "ADD_PROJECTS";

    fn into_action(self) -> StoreAction {
        StoreAction::AddProjects(self)
    }

    fn matched(action: &StoreAction) -> Option<&Self> {
        match action {
            StoreAction::AddProjects(payload) => Some(payload),
            _ => None,
        }
    }
}

impl Payload for UpdateProject {
    type Action = StoreAction;
    const TYPE: &'static str = "UPDATE_PROJECT";

    fn into_action(self) -> StoreAction {
        StoreAction::UpdateProject(self)
    }

    fn matched(action: &StoreAction) -> Option<&Self> {
        match action {
            StoreAction::UpdateProject(payload) => Some(payload),
            _ => None,
        }
    }
}

impl Payload for DeleteProject {
    type Action = StoreAction;
    const TYPE: &'static str = "REMOVE_PROJECT";

    fn into_action(self) -> StoreAction {
        StoreAction::DeleteProject(self)
    }

    fn matched(action: &StoreAction) -> Option<&Self> {
        match action {
            StoreAction::DeleteProject(payload) => Some(payload),
            _ => None,
        }
    }
}

impl Payload for SetActiveProject {
    type Action = StoreAction;
    const TYPE: &'static str = "SET_ACTIVE_PROJECT";

    fn into_action(self) -> StoreAction {
        StoreAction::SetActiveProject(self)
    }

    fn matched(action: &StoreAction) -> Option<&Self> {
        match action {
            StoreAction::SetActiveProject(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Existing order first (replaced in place), then ids not seen before in
/// input order. Later duplicates win over earlier ones.
fn merge_projects(existing: &[Arc<Project>], incoming: &[Arc<Project>]) -> Vec<Arc<Project>> {
    let mut merged: Vec<Arc<Project>> = Vec::with_capacity(existing.len() + incoming.len());
    let mut index: HashMap<&str, usize> = HashMap::new();

    for project in existing.iter().chain(incoming) {
        match index.get(project.id.as_str()) {
            Some(&slot) => merged[slot] = Arc::clone(project),
            None => {
                index.insert(project.id.as_str(), merged.len());
                merged.push(Arc::clone(project));
            }
        }
    }

    merged
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectStoreReducer;

impl Reducer for ProjectStoreReducer {
    type State = ProjectStoreState;
    type Action = StoreAction;

    fn reduce(&self, state: &ProjectStoreState, action: &StoreAction) -> Option<ProjectStoreState> {
        match action {
            StoreAction::AddProjects(AddProjects { projects }) => {
                let projects = merge_projects(&state.projects, projects);
                let active_project_id = state
                    .active_project_id
                    .clone()
                    .or_else(|| projects.first().map(|project| project.id.clone()));
                Some(ProjectStoreState {
                    projects,
                    active_project_id,
                })
            }
            StoreAction::UpdateProject(UpdateProject { project }) => {
                let slot = state.projects.iter().position(|it| it.id == project.id)?;
                let mut projects = state.projects.clone();
                projects[slot] = Arc::clone(project);
                Some(ProjectStoreState {
                    projects,
                    ..state.clone()
                })
            }
            StoreAction::DeleteProject(DeleteProject { project_id }) => {
                if state.find(project_id).is_none() {
                    return None;
                }
                Some(ProjectStoreState {
                    projects: state
                        .projects
                        .iter()
                        .filter(|it| it.id != *project_id)
                        .cloned()
                        .collect(),
                    ..state.clone()
                })
            }
            StoreAction::SetActiveProject(SetActiveProject { active_project_id }) => {
                Some(ProjectStoreState {
                    active_project_id: Some(active_project_id.clone()),
                    ..state.clone()
                })
            }
        }
    }
}

pub type ProjectStore = Store<ProjectStoreReducer>;
