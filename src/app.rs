// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The application owns the project store and, while a project is active,
//! an editing session on a copy of it. UI panels report what the user asked
//! for; this module turns those requests into reducer actions. Photo
//! decoding and file reading happen on background threads whose results
//! come back over a channel and are dispatched when they arrive.

use crate::config::EditorConfig;
use crate::io::media::LoadedImage;
use crate::io::{import, serialization, ImportError};
use crate::models::project::Project;
use crate::state::editing::{open_session, EditingSession, MovePhoto, ScalePhoto};
use crate::state::reducer::Payload;
use crate::state::store::{
    AddProjects, DeleteProject, ProjectStore, SetActiveProject, UpdateProject,
};
use crate::ui::{canvas, projects, toolbar};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

/// Result of a background job.
enum LoaderMessage {
    /// Projects built from photos or read from a layout file.
    Projects {
        origin: String,
        result: anyhow::Result<Vec<Project>>,
    },
    /// Pixels for displaying the image at `src`.
    Texture {
        src: String,
        result: Result<LoadedImage, ImportError>,
    },
}

#[derive(Clone)]
enum TextureSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Main application state.
pub struct PhotoFrameApp {
    config: EditorConfig,

    /// All projects and the active pointer
    store: ProjectStore,

    /// Working copy of the active project
    session: Option<EditingSession>,

    /// Display textures keyed by image source
    textures: HashMap<String, TextureSlot>,

    sender: Sender<LoaderMessage>,
    receiver: Receiver<LoaderMessage>,

    /// Background jobs still running
    pending_jobs: usize,
}

impl PhotoFrameApp {
    pub fn new(config: EditorConfig) -> Self {
        let (sender, receiver) = channel();
        Self {
            config,
            store: ProjectStore::default(),
            session: None,
            textures: HashMap::new(),
            sender,
            receiver,
            pending_jobs: 0,
        }
    }

    /// Run `job` on a background thread and deliver its result to the UI.
    fn spawn_job<F>(&mut self, job: F)
    where
        F: FnOnce() -> LoaderMessage + Send + 'static,
    {
        let sender = self.sender.clone();
        self.pending_jobs += 1;
        std::thread::spawn(move || {
            // The receiver only goes away when the app is closing.
            let _ = sender.send(job());
        });
    }

    /// Let the user pick photos and build a project for each one.
    fn upload_images(&mut self) {
        let paths = match import::pick_photos() {
            Ok(paths) => paths,
            Err(e) => {
                log::info!("Upload cancelled: {}", e);
                return;
            }
        };

        let config = self.config.clone();
        self.spawn_job(move || LoaderMessage::Projects {
            origin: format!("{} photo(s)", paths.len()),
            result: Ok(import::build_projects(&paths, &config)),
        });
    }

    /// Let the user pick a layout file and merge its projects.
    fn import_projects(&mut self) {
        let path = match import::pick_project_file() {
            Ok(path) => path,
            Err(e) => {
                log::info!("Import cancelled: {}", e);
                return;
            }
        };

        self.spawn_job(move || LoaderMessage::Projects {
            origin: path.display().to_string(),
            result: serialization::import_projects(&path),
        });
    }

    fn export_projects(&self) {
        let Some(path) = import::pick_export_path() else {
            return;
        };
        let projects = &self.store.state().projects;
        match serialization::export_projects(projects, &path) {
            Ok(()) => log::info!("Exported {} projects to {}", projects.len(), path.display()),
            Err(e) => log::error!("Failed to export projects: {:#}", e),
        }
    }

    fn receive_loader_messages(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.receiver.try_recv() {
            self.pending_jobs = self.pending_jobs.saturating_sub(1);
            match message {
                LoaderMessage::Projects { origin, result } => match result {
                    Ok(projects) if projects.is_empty() => {
                        log::warn!("No projects found in {}", origin);
                    }
                    Ok(projects) => {
                        log::info!("Adding {} projects from {}", projects.len(), origin);
                        let projects = projects.into_iter().map(Arc::new).collect();
                        self.store.dispatch(AddProjects { projects }.into_action());
                    }
                    Err(e) => log::error!("Failed to load projects from {}: {:#}", origin, e),
                },
                LoaderMessage::Texture { src, result } => {
                    let slot = match result {
                        Ok(loaded) => {
                            let size = [loaded.width as usize, loaded.height as usize];
                            let color_image =
                                egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                            TextureSlot::Ready(ctx.load_texture(
                                src.clone(),
                                color_image,
                                egui::TextureOptions::LINEAR,
                            ))
                        }
                        Err(e) => {
                            log::error!("{}", e);
                            TextureSlot::Failed
                        }
                    };
                    self.textures.insert(src, slot);
                }
            }
        }
    }

    /// Texture slot for `src`, starting a background load on first request.
    fn texture(&mut self, src: &str) -> &TextureSlot {
        if self.textures.contains_key(src) {
            return &self.textures[src];
        }

        let key = src.to_string();
        self.textures.insert(key.clone(), TextureSlot::Loading);
        let src = key.clone();
        self.spawn_job(move || LoaderMessage::Texture {
            result: crate::io::media::load_image(&PathBuf::from(&src)),
            src,
        });
        &self.textures[&key]
    }

    /// Keep the editing session on the active project.
    ///
    /// A session is only reopened when the active id changes, so unsaved
    /// edits survive unrelated store updates.
    fn sync_session(&mut self) {
        let active = self.store.state().active_project().cloned();
        match active {
            None => self.session = None,
            Some(project) => {
                let current_id = self
                    .session
                    .as_ref()
                    .map(|session| session.state().project.id.as_str());
                if current_id != Some(project.id.as_str()) {
                    log::info!("Editing project {}", project.id);
                    self.session = Some(open_session(project));
                }
            }
        }
    }

    fn save_session(&mut self) {
        if let Some(session) = &self.session {
            let project = Arc::clone(&session.state().project);
            log::info!("Saving project {}", project.id);
            self.store.dispatch(UpdateProject { project }.into_action());
        }
    }

    fn handle_toolbar(&mut self, command: toolbar::ToolbarCommand) {
        use toolbar::ToolbarCommand;

        let step = self.config.move_step;
        let action = match command {
            ToolbarCommand::None => return,
            ToolbarCommand::Save => {
                self.save_session();
                return;
            }
            ToolbarCommand::ZoomIn => ScalePhoto {
                scale: self.config.zoom_in_factor,
            }
            .into_action(),
            ToolbarCommand::ZoomOut => ScalePhoto {
                scale: self.config.zoom_out_factor,
            }
            .into_action(),
            ToolbarCommand::MoveLeft => MovePhoto { dx: -step, dy: 0.0 }.into_action(),
            ToolbarCommand::MoveRight => MovePhoto { dx: step, dy: 0.0 }.into_action(),
            ToolbarCommand::MoveUp => MovePhoto { dx: 0.0, dy: -step }.into_action(),
            ToolbarCommand::MoveDown => MovePhoto { dx: 0.0, dy: step }.into_action(),
        };

        if let Some(session) = self.session.as_mut() {
            session.dispatch(action);
        }
    }
}

impl eframe::App for PhotoFrameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive_loader_messages(ctx);
        self.sync_session();

        // Keep polling while background work is running
        if self.pending_jobs > 0 {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Upload Images...").clicked() {
                        ui.close_menu();
                        self.upload_images();
                    }
                    if ui.button("Import Projects...").clicked() {
                        ui.close_menu();
                        self.import_projects();
                    }
                    let has_projects = !self.store.state().projects.is_empty();
                    if ui
                        .add_enabled(has_projects, egui::Button::new("Export Projects..."))
                        .clicked()
                    {
                        ui.close_menu();
                        self.export_projects();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Editing toolbar
        let has_session = self.session.is_some();
        let command = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, has_session))
            .inner;
        self.handle_toolbar(command);

        // Project list (left side)
        let state = Arc::clone(self.store.state());
        let list_action = egui::SidePanel::left("projects")
            .default_width(220.0)
            .show(ctx, |ui| projects::show(ui, &state))
            .inner;

        match list_action {
            projects::ProjectListAction::Select(id) => {
                self.store.dispatch(
                    SetActiveProject {
                        active_project_id: id,
                    }
                    .into_action(),
                );
            }
            projects::ProjectListAction::Delete(id) => {
                // The active pointer is deliberately left alone.
                self.store
                    .dispatch(DeleteProject { project_id: id }.into_action());
            }
            projects::ProjectListAction::None => {}
        }

        // Keyboard nudges
        if self.session.is_some() && !ctx.wants_keyboard_input() {
            let command = ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowLeft) {
                    toolbar::ToolbarCommand::MoveLeft
                } else if i.key_pressed(egui::Key::ArrowRight) {
                    toolbar::ToolbarCommand::MoveRight
                } else if i.key_pressed(egui::Key::ArrowUp) {
                    toolbar::ToolbarCommand::MoveUp
                } else if i.key_pressed(egui::Key::ArrowDown) {
                    toolbar::ToolbarCommand::MoveDown
                } else if i.key_pressed(egui::Key::Plus) {
                    toolbar::ToolbarCommand::ZoomIn
                } else if i.key_pressed(egui::Key::Minus) {
                    toolbar::ToolbarCommand::ZoomOut
                } else {
                    toolbar::ToolbarCommand::None
                }
            });
            self.handle_toolbar(command);
        }

        // Main canvas (center)
        let project = self
            .session
            .as_ref()
            .map(|session| Arc::clone(&session.state().project));
        let texture = match &project {
            Some(project) => self.texture(&project.image.src).clone(),
            None => TextureSlot::Loading,
        };
        let image = match &texture {
            TextureSlot::Loading => canvas::ImageStatus::Loading,
            TextureSlot::Ready(texture) => canvas::ImageStatus::Ready(texture),
            TextureSlot::Failed => canvas::ImageStatus::Failed,
        };

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| match &project {
                Some(project) => canvas::show(ui, project, image),
                None => {
                    canvas::show_placeholder(ui, state.projects.is_empty());
                    canvas::CanvasAction::None
                }
            })
            .inner;

        if let (canvas::CanvasAction::Drag { dx, dy }, Some(session)) =
            (canvas_action, self.session.as_mut())
        {
            session.dispatch(MovePhoto { dx, dy }.into_action());
        }
    }
}
