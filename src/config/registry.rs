// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::rc::Rc;

use crate::config::Blueprint;
use crate::engine::Depengine;
use crate::errors::{BlueprintError, ValidationError};
use crate::traits::Generator;

/// Named host-supplied generators for blueprint-built engines.
///
/// Blueprints reference generator bodies by name; the registry is where the
/// host supplies those bodies. Generators are stored behind `Rc` so one
/// registered body can back any number of blueprint entries.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Rc<dyn Generator<String, String>>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator body under a name. Re-inserting a name
    /// replaces the previous body.
    pub fn insert<G>(&mut self, name: impl Into<String>, generator: G)
    where
        G: Generator<String, String> + 'static,
    {
        self.generators.insert(name.into(), Rc::new(generator));
    }

    pub fn get(&self, name: &str) -> Option<&Rc<dyn Generator<String, String>>> {
        self.generators.get(name)
    }
}

/// Resolves a blueprint into wired runtime engines.
///
/// Engines are created first with their initials, then entries are
/// registered with dependency handles resolved across the whole set, so
/// declaration order in the blueprint does not matter.
///
/// Structural problems surface as [`BlueprintError::Validation`]; an entry
/// naming a generator absent from the registry surfaces as
/// [`BlueprintError::UnknownGenerator`]. Run
/// [`validate_blueprint`](crate::config::validate_blueprint) first to
/// collect all structural errors in one pass.
pub fn build_engines(
    blueprint: &Blueprint,
    registry: &GeneratorRegistry,
) -> Result<HashMap<String, Depengine<String, String>>, BlueprintError> {
    let mut engines = HashMap::with_capacity(blueprint.engines.len());
    for engine_config in &blueprint.engines {
        engines.insert(
            engine_config.id.clone(),
            Depengine::with_initials(engine_config.id.clone(), engine_config.initials.clone()),
        );
    }

    for engine_config in &blueprint.engines {
        let engine = &engines[&engine_config.id];

        for entry in &engine_config.entries {
            let generator = Rc::clone(registry.get(&entry.generator).ok_or_else(|| {
                BlueprintError::UnknownGenerator {
                    engine_id: engine_config.id.clone(),
                    key: entry.key.clone(),
                    generator: entry.generator.clone(),
                }
            })?);

            let mut handles = Vec::with_capacity(entry.depends_on.len());
            for dependency in &entry.depends_on {
                let owner_id = dependency
                    .engine
                    .as_deref()
                    .unwrap_or(engine_config.id.as_str());
                let owner = engines.get(owner_id).ok_or_else(|| {
                    BlueprintError::Validation {
                        errors: vec![ValidationError::UnknownEngineReference {
                            engine_id: engine_config.id.clone(),
                            key: entry.key.clone(),
                            referenced: owner_id.to_string(),
                        }],
                    }
                })?;
                handles.push(owner.dependency(dependency.key.clone()));
            }

            engine.register(
                entry.key.clone(),
                move |deps: &HashMap<String, String>| generator.generate(deps),
                handles,
            );
        }
    }

    Ok(engines)
}
