// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sketchpad - freehand drawing surface
//!
//! A raster drawing surface driven by mouse and touch input through a
//! single drag state machine, with an egui front end.

pub mod app;
pub mod config;
pub mod input;
pub mod io;
pub mod models;
pub mod surface;
pub mod ui;
pub mod util;
