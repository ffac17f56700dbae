// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use super::cached::CachedGenerator;
use super::dependency::Dependency;

/// Maps a cached generator to the dependencies it needs.
pub(crate) struct Entry<K, P> {
    generator: CachedGenerator<K, P>,
    dependencies: Vec<EntryDependency<K, P>>,
}

impl<K, P: Clone> Entry<K, P> {
    /// `dependencies` must already be deduplicated by (engine, key);
    /// registration takes care of that.
    pub(crate) fn new(
        generator: CachedGenerator<K, P>,
        dependencies: Vec<EntryDependency<K, P>>,
    ) -> Self {
        Entry {
            generator,
            dependencies,
        }
    }

    pub(crate) fn dependencies(&self) -> &[EntryDependency<K, P>] {
        &self.dependencies
    }

    pub(crate) fn generate(&self, dependencies: &HashMap<K, P>) -> P {
        self.generator.generate(dependencies)
    }
}

/// A dependency as stored in an entry.
///
/// Handles that target the entry's own engine are kept as bare keys: a
/// strong handle to the engine's own state inside its entry table would
/// form an `Rc` cycle, keeping the engine and its memoized products alive
/// after the host drops its last handle. Handles into other engines keep
/// the strong form, which is what keeps the foreign engine alive for as
/// long as something depends on it.
pub(crate) enum EntryDependency<K, P> {
    /// A product of the entry's own engine.
    Local { key: K },
    /// A handle into another engine instance.
    Foreign(Dependency<K, P>),
}

impl<K, P> EntryDependency<K, P>
where
    K: Eq + Hash + Clone + Display,
    P: Clone,
{
    /// The key the resolved product is delivered under, always in the
    /// owning engine's namespace.
    pub(crate) fn key(&self) -> &K {
        match self {
            EntryDependency::Local { key } => key,
            EntryDependency::Foreign(handle) => handle.key(),
        }
    }

    pub(crate) fn same_target(&self, other: &EntryDependency<K, P>) -> bool {
        match (self, other) {
            (EntryDependency::Local { key: a }, EntryDependency::Local { key: b }) => a == b,
            (EntryDependency::Foreign(a), EntryDependency::Foreign(b)) => a.same_target(b),
            // A foreign handle never targets the entry's own engine;
            // registration downgrades those to the local form first.
            _ => false,
        }
    }
}
