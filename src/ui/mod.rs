// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the photo framing editor.

pub mod canvas;
pub mod projects;
pub mod toolbar;
