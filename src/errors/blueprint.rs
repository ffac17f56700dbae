// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for blueprint loading, validation, and engine construction.

use thiserror::Error;

/// Errors that can occur while loading a blueprint or building engines
/// from one.
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// The blueprint file could not be read.
    #[error("Failed to read blueprint file: {0}")]
    Io(#[from] std::io::Error),

    /// The blueprint file is not valid YAML for the blueprint schema.
    #[error("Failed to parse blueprint YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The blueprint parsed but failed structural validation.
    #[error("Blueprint validation failed with {} error(s)", errors.len())]
    Validation { errors: Vec<ValidationError> },

    /// An entry names a generator that was never registered with the
    /// generator registry.
    #[error("No generator named '{generator}' registered for entry '{engine_id}:{key}'")]
    UnknownGenerator {
        engine_id: String,
        key: String,
        generator: String,
    },
}

/// Errors that can occur during blueprint validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Two engines in the blueprint share an id.
    DuplicateEngineId { engine_id: String },
    /// One engine declares two entries for the same key.
    DuplicateEntryKey { engine_id: String, key: String },
    /// A dependency names an engine that is not in the blueprint.
    UnknownEngineReference {
        engine_id: String,
        key: String,
        referenced: String,
    },
    /// A dependency names a key its owning engine never provides, as
    /// neither an entry nor an initial.
    UnprovidedDependency {
        engine_id: String,
        key: String,
        dependency: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::DuplicateEngineId { engine_id } => {
                write!(f, "Duplicate engine id: '{}'", engine_id)
            }
            ValidationError::DuplicateEntryKey { engine_id, key } => {
                write!(f, "Engine '{}' declares entry '{}' more than once", engine_id, key)
            }
            ValidationError::UnknownEngineReference {
                engine_id,
                key,
                referenced,
            } => {
                write!(
                    f,
                    "Entry '{}:{}' depends on engine '{}' which is not in the blueprint",
                    engine_id, key, referenced
                )
            }
            ValidationError::UnprovidedDependency {
                engine_id,
                key,
                dependency,
            } => {
                write!(
                    f,
                    "Entry '{}:{}' depends on '{}' which no entry or initial provides",
                    engine_id, key, dependency
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
