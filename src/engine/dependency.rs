// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Display;
use std::hash::Hash;

use super::depengine::{Depengine, ResolutionStack};
use crate::errors::ResolveError;

/// An unresolved reference to a product: an immutable (owning engine, key)
/// pair.
///
/// A handle is a lookup descriptor, not an owner of the product. It is
/// created by [`Depengine::dependency`] and can be registered into any
/// engine's entry, including an engine other than the one that created it;
/// resolution always routes through the owning engine under the owning
/// engine's key name. Handles stay valid regardless of the order engines
/// were constructed in, as long as the referenced key exists by the time it
/// is resolved.
pub struct Dependency<K, P> {
    engine: Depengine<K, P>,
    key: K,
}

impl<K, P> Dependency<K, P>
where
    K: Eq + Hash + Clone + Display,
    P: Clone,
{
    pub(crate) fn new(engine: Depengine<K, P>, key: K) -> Self {
        Dependency { engine, key }
    }

    /// The key of the product depended on, in the owning engine's namespace.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Resolves the dependency by retrieving the product from its owning
    /// engine.
    pub fn resolve(&self) -> Result<P, ResolveError> {
        self.engine.resolve(&self.key)
    }

    pub(crate) fn resolve_with(&self, stack: &mut ResolutionStack<K>) -> Result<P, ResolveError> {
        self.engine.resolve_with(&self.key, stack)
    }

    /// Two handles collapse to one at registration time when they name the
    /// same key on the same engine instance.
    pub(crate) fn same_target(&self, other: &Dependency<K, P>) -> bool {
        self.engine.shares_state_with(&other.engine) && self.key == other.key
    }

    /// Whether this handle targets the given engine instance. Registration
    /// stores such handles as bare keys rather than strong references.
    pub(crate) fn is_owned_by(&self, engine: &Depengine<K, P>) -> bool {
        engine.shares_state_with(&self.engine)
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

impl<K: Clone, P> Clone for Dependency<K, P> {
    fn clone(&self) -> Self {
        Dependency {
            engine: self.engine.clone(),
            key: self.key.clone(),
        }
    }
}
