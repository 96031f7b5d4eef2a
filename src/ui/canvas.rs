// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Framing canvas.
//!
//! Paints the project's canvas at the largest size that fits the panel and
//! draws the photo through the project's placement matrix, clipped to the
//! canvas. Dragging the photo is reported in canvas units.

use crate::models::project::{Project, Size};
use crate::util::geometry::Point;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    /// Pointer dragged by (`dx`, `dy`) canvas units.
    Drag { dx: f64, dy: f64 },
}

/// Display state of the photo's pixels.
#[derive(Clone, Copy)]
pub enum ImageStatus<'a> {
    Loading,
    Ready(&'a egui::TextureHandle),
    Failed,
}

impl ImageStatus<'_> {
    /// Text painted over the canvas instead of the photo.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ImageStatus::Loading => Some("Loading image..."),
            ImageStatus::Ready(_) => None,
            ImageStatus::Failed => Some("Image could not be loaded"),
        }
    }
}

/// Screen pixels per canvas unit so that the canvas fits in `available`.
pub fn fit_scale(canvas: Size, available: egui::Vec2) -> f32 {
    let by_width = available.x / canvas.width as f32;
    let by_height = available.y / canvas.height as f32;
    by_width.min(by_height).max(0.0)
}

/// Screen rectangle covered by the photo.
///
/// Maps the two opposite image corners through the matrix, which is exact
/// for scale and translate placements.
pub fn image_screen_rect(project: &Project, canvas_rect: egui::Rect, scale: f32) -> egui::Rect {
    let to_screen = |p: Point| {
        canvas_rect.min + egui::vec2(p.x as f32 * scale, p.y as f32 * scale)
    };
    let top_left = project.matrix.apply_to_point(Point::new(0.0, 0.0));
    let bottom_right = project
        .matrix
        .apply_to_point(Point::new(project.image.width, project.image.height));
    egui::Rect::from_two_pos(to_screen(top_left), to_screen(bottom_right))
}

/// Display the project canvas and handle dragging.
pub fn show(
    ui: &mut egui::Ui,
    project: &Project,
    image: ImageStatus<'_>,
) -> CanvasAction {
    ui.label(egui::RichText::new(format!("Editing {}", project.id)).strong());

    let available = ui.available_size();
    let scale = fit_scale(project.canvas, available);
    let canvas_size = egui::vec2(
        project.canvas.width as f32 * scale,
        project.canvas.height as f32 * scale,
    );

    // Centre the canvas horizontally
    let (outer, _) = ui.allocate_exact_size(available, egui::Sense::hover());
    let canvas_rect = egui::Rect::from_min_size(
        outer.min + egui::vec2((available.x - canvas_size.x) / 2.0, 0.0),
        canvas_size,
    );
    let response = ui.interact(canvas_rect, ui.id().with("canvas"), egui::Sense::drag());

    let painter = ui.painter_at(canvas_rect);
    painter.rect_filled(canvas_rect, 0.0, egui::Color32::from_gray(40));

    let image_rect = image_screen_rect(project, canvas_rect, scale);
    if let ImageStatus::Ready(texture) = image {
        painter.image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    } else {
        painter.rect_filled(image_rect, 0.0, egui::Color32::from_gray(70));
    }
    if let Some(message) = image.message() {
        let color = match image {
            ImageStatus::Failed => egui::Color32::from_rgb(230, 120, 120),
            _ => egui::Color32::from_gray(200),
        };
        painter.text(
            canvas_rect.center(),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(16.0),
            color,
        );
    }

    ui.painter().rect_stroke(
        canvas_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }

    let delta = response.drag_delta();
    if scale > 0.0 && delta != egui::Vec2::ZERO {
        return CanvasAction::Drag {
            dx: f64::from(delta.x / scale),
            dy: f64::from(delta.y / scale),
        };
    }

    CanvasAction::None
}

/// Message shown when no project is being edited.
pub fn show_placeholder(ui: &mut egui::Ui, no_projects: bool) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Photo Frame")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            let hint = if no_projects {
                "File → Upload Images... or File → Import Projects... to begin"
            } else {
                "Select a project from the list"
            };
            ui.label(egui::RichText::new(hint).color(egui::Color32::from_gray(180)));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::ImageRef;
    use crate::util::geometry::AffineMatrix;

    #[test]
    fn test_image_status_message() {
        assert_eq!(ImageStatus::Loading.message(), Some("Loading image..."));
        assert_eq!(ImageStatus::Failed.message(), Some("Image could not be loaded"));
    }

    #[test]
    fn test_fit_scale() {
        let canvas = Size::new(15.0, 10.0);
        assert_eq!(fit_scale(canvas, egui::vec2(300.0, 1000.0)), 20.0);
        assert_eq!(fit_scale(canvas, egui::vec2(3000.0, 100.0)), 10.0);
    }

    #[test]
    fn test_image_screen_rect() {
        let project = Project {
            id: "TEST".to_string(),
            canvas: Size::new(5.0, 10.0),
            image: ImageRef::new("none", 50.0, 100.0),
            matrix: AffineMatrix {
                a: 0.2,
                b: 0.0,
                c: 0.0,
                d: 0.2,
                e: -2.5,
                f: -5.0,
            },
        };
        let canvas_rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(50.0, 100.0));

        let rect = image_screen_rect(&project, canvas_rect, 10.0);
        assert!((rect.min.x - 75.0).abs() < 1e-3);
        assert!((rect.min.y - 0.0).abs() < 1e-3);
        assert!((rect.width() - 100.0).abs() < 1e-3);
        assert!((rect.height() - 200.0).abs() < 1e-3);
    }
}
