// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Photo Frame - place photos inside a fixed-size canvas.
//!
//! A cross-platform desktop application for importing photos, framing each
//! one inside a virtual canvas with pan and zoom, and exporting or
//! importing the resulting project layouts as JSON.

mod app;
mod config;
mod io;
mod models;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::PhotoFrameApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::load();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Photo Frame"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Photo Frame",
        options,
        Box::new(move |_cc| Ok(Box::new(PhotoFrameApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
