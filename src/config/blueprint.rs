// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::BlueprintError;
use crate::observability::messages::blueprint::BlueprintLoaded;
use crate::observability::messages::StructuredLog;

/// Declarative wiring for a set of string-keyed engines.
///
/// A blueprint describes engines, their initials, and their entries; the
/// generator bodies themselves stay host-supplied and are looked up by name
/// in a [`GeneratorRegistry`](crate::config::GeneratorRegistry) when the
/// blueprint is built. It is typically loaded from a YAML file.
///
/// # Example
/// ```yaml
/// engines:
///   - id: names
///     initials:
///       first_name: jon
///       last_name: anderson
///     entries:
///       - key: full_name
///         generator: concat_names
///         depends_on:
///           - key: first_name
///           - key: last_name
///   - id: records
///     entries:
///       - key: named_id
///         generator: concat_named_id
///         depends_on:
///           - engine: names
///             key: full_name
///           - engine: names
///             key: id
/// ```
#[derive(Debug, Deserialize)]
pub struct Blueprint {
    pub engines: Vec<EngineConfig>,
}

/// One engine in a blueprint: id, pre-supplied products, and entries.
#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    pub id: String,
    #[serde(default)]
    pub initials: HashMap<String, String>,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// One registered entry: the product key, the name of the generator in the
/// registry, and the dependencies the generator needs.
#[derive(Debug, Deserialize)]
pub struct EntryConfig {
    pub key: String,
    pub generator: String,
    #[serde(default)]
    pub depends_on: Vec<DependencyRef>,
}

/// A dependency reference. `engine` omitted means the entry's own engine.
#[derive(Debug, Deserialize)]
pub struct DependencyRef {
    #[serde(default)]
    pub engine: Option<String>,
    pub key: String,
}

/// Load a blueprint from a YAML file.
pub fn load_blueprint<P: AsRef<Path>>(path: P) -> Result<Blueprint, BlueprintError> {
    let content = fs::read_to_string(&path)?;
    let blueprint: Blueprint = serde_yaml::from_str(&content)?;

    BlueprintLoaded {
        path: &path.as_ref().display().to_string(),
        engine_count: blueprint.engines.len(),
    }
    .log();

    Ok(blueprint)
}

/// Load and validate a blueprint from a YAML file.
///
/// Validation accumulates every structural problem it finds; the returned
/// error carries the full list.
pub fn load_and_validate_blueprint<P: AsRef<Path>>(path: P) -> Result<Blueprint, BlueprintError> {
    let blueprint = load_blueprint(path)?;

    if let Err(errors) = crate::config::validate_blueprint(&blueprint) {
        return Err(BlueprintError::Validation { errors });
    }

    Ok(blueprint)
}
