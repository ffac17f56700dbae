// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // blueprint loading + validation
pub mod engine;        // engines + resolution core
pub mod errors;        // error handling
pub mod observability; // structured log messages
pub mod traits;        // generator abstraction
