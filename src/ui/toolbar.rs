// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editing toolbar.
//!
//! Buttons for saving the working copy and for zooming or nudging the photo
//! inside its canvas.

/// What the user asked for from the toolbar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    None,
    Save,
    ZoomOut,
    ZoomIn,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
}

/// Display the toolbar. Buttons are disabled when nothing is being edited.
pub fn show(ui: &mut egui::Ui, enabled: bool) -> ToolbarCommand {
    let mut command = ToolbarCommand::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.add_enabled_ui(enabled, |ui| {
            if ui.button("💾 Save").clicked() {
                command = ToolbarCommand::Save;
            }

            ui.separator();

            if ui.button("Scale 50%").clicked() {
                command = ToolbarCommand::ZoomOut;
            }
            if ui.button("Scale 200%").clicked() {
                command = ToolbarCommand::ZoomIn;
            }

            ui.separator();

            if ui.button("⬅ Move Left").clicked() {
                command = ToolbarCommand::MoveLeft;
            }
            if ui.button("Move Right ➡").clicked() {
                command = ToolbarCommand::MoveRight;
            }
            if ui.button("⬆ Move Up").clicked() {
                command = ToolbarCommand::MoveUp;
            }
            if ui.button("⬇ Move Down").clicked() {
                command = ToolbarCommand::MoveDown;
            }
        });

        ui.separator();

        let hint = if enabled {
            "Drag the photo or use the arrow keys to reposition it"
        } else {
            "Select a project to start framing"
        };
        ui.label(egui::RichText::new(hint).italics().weak());
    });

    command
}
