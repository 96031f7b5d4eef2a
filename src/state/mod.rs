// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application state machines.
//!
//! All state changes go through reducers: pure functions from the current
//! state and an action to the next state. `reducer` holds the generic
//! machinery, `store` the project collection and `editing` the working copy
//! of the project being framed.

pub mod editing;
pub mod reducer;
pub mod store;
