// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list panel.

use crate::state::store::ProjectStoreState;
use std::path::Path;

/// Result of project list interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectListAction {
    None,
    Select(String),
    Delete(String),
}

/// Display all projects, highlighting the active one.
pub fn show(ui: &mut egui::Ui, state: &ProjectStoreState) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.heading("Projects");
    ui.separator();

    if state.projects.is_empty() {
        ui.label(egui::RichText::new("No projects yet").weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for project in &state.projects {
            let selected = state.active_project_id.as_deref() == Some(project.id.as_str());
            ui.horizontal(|ui| {
                let label = format!("{} · {}", image_name(&project.image.src), project.id);
                if ui.selectable_label(selected, label).clicked() {
                    action = ProjectListAction::Select(project.id.clone());
                }
                if ui.small_button("🗑").on_hover_text("Delete project").clicked() {
                    action = ProjectListAction::Delete(project.id.clone());
                }
            });
        }
    });

    action
}

/// Short display name for an image source.
fn image_name(src: &str) -> &str {
    Path::new(src)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_name() {
        assert_eq!(image_name("/photos/beach.jpg"), "beach.jpg");
        assert_eq!(image_name("none"), "none");
        assert_eq!(image_name(""), "");
    }
}
