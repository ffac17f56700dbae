// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod blueprint;
mod registry;
mod validation;

pub use blueprint::{
    load_and_validate_blueprint, load_blueprint, Blueprint, DependencyRef, EngineConfig,
    EntryConfig,
};
pub use registry::{build_engines, GeneratorRegistry};
pub use validation::validate_blueprint;
