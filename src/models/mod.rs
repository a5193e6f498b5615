// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Value types shared by the surface, the input adapters and the UI.

pub mod color;
pub mod point;
pub mod stroke;
