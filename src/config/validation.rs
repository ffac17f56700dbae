// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Blueprint validation for structural correctness.
//!
//! Validation runs as a two-stage pipeline:
//!
//! 1. **Uniqueness**: engine ids are unique, and entry keys are unique
//!    within each engine.
//! 2. **Reference checks**: every dependency names an engine that exists in
//!    the blueprint and a key that engine provides (entry or initial).
//!
//! Reference checks only run once uniqueness holds, since a duplicated id
//! makes reference resolution ambiguous. Errors are accumulated so callers
//! see every problem at once rather than fixing them one by one.
//!
//! Cycles are deliberately not checked here: the resolution core detects
//! them at run time with the precise dynamic (engine, key) path, which a
//! static check over the blueprint could only approximate.

use std::collections::{HashMap, HashSet};

use crate::config::Blueprint;
use crate::errors::ValidationError;
use crate::observability::messages::blueprint::BlueprintValidationFailed;
use crate::observability::messages::StructuredLog;

/// Validates a blueprint, accumulating every error found.
pub fn validate_blueprint(blueprint: &Blueprint) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_unique_engine_ids(blueprint));
    errors.extend(validate_unique_entry_keys(blueprint));

    if errors.is_empty() {
        errors.extend(validate_dependency_references(blueprint));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        BlueprintValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

fn validate_unique_engine_ids(blueprint: &Blueprint) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for engine in &blueprint.engines {
        if !seen.insert(engine.id.as_str()) {
            errors.push(ValidationError::DuplicateEngineId {
                engine_id: engine.id.clone(),
            });
        }
    }

    errors
}

fn validate_unique_entry_keys(blueprint: &Blueprint) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for engine in &blueprint.engines {
        let mut seen = HashSet::new();
        for entry in &engine.entries {
            if !seen.insert(entry.key.as_str()) {
                errors.push(ValidationError::DuplicateEntryKey {
                    engine_id: engine.id.clone(),
                    key: entry.key.clone(),
                });
            }
        }
    }

    errors
}

fn validate_dependency_references(blueprint: &Blueprint) -> Vec<ValidationError> {
    // Keys an engine provides: registered entries plus initials. An entry
    // shadows an identically-named initial, but either satisfies a
    // reference.
    let provided: HashMap<&str, HashSet<&str>> = blueprint
        .engines
        .iter()
        .map(|engine| {
            let keys = engine
                .entries
                .iter()
                .map(|entry| entry.key.as_str())
                .chain(engine.initials.keys().map(String::as_str))
                .collect();
            (engine.id.as_str(), keys)
        })
        .collect();

    let mut errors = Vec::new();
    for engine in &blueprint.engines {
        for entry in &engine.entries {
            for dependency in &entry.depends_on {
                let owner = dependency.engine.as_deref().unwrap_or(engine.id.as_str());
                match provided.get(owner) {
                    None => errors.push(ValidationError::UnknownEngineReference {
                        engine_id: engine.id.clone(),
                        key: entry.key.clone(),
                        referenced: owner.to_string(),
                    }),
                    Some(keys) if !keys.contains(dependency.key.as_str()) => {
                        errors.push(ValidationError::UnprovidedDependency {
                            engine_id: engine.id.clone(),
                            key: entry.key.clone(),
                            dependency: format!("{}:{}", owner, dependency.key),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
    }

    errors
}
