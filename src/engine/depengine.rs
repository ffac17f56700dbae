// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The dependency generation engine and its resolution algorithm.
//!
//! A [`Depengine`] owns a namespace of generators capable of producing
//! desired products. Generators may depend on the products of other
//! generators, registered in the same engine or in a different engine
//! instance; the engine drives generator execution and routes products to
//! the generators that depend on them.
//!
//! # Resolution Algorithm
//!
//! Resolving a key proceeds in three steps:
//!
//! 1. **Entry**: if the key has a registered entry, every declared
//!    dependency handle is resolved first (recursing into the handle's
//!    owning engine, which may be this engine or another instance), the
//!    results are assembled into a mapping keyed by each handle's own key,
//!    and the entry's cached generator is invoked with that mapping.
//! 2. **Initial**: otherwise, if the key has an initial, the initial is
//!    returned directly and no generator runs.
//! 3. **Failure**: otherwise resolution fails with
//!    [`ResolveError::MissingProduct`], carrying this engine as the source
//!    and no destination yet; the first ancestor frame that directly
//!    declared the failing handle fills in the destination.
//!
//! Each entry's generator runs at most once per engine lifetime: the product
//! is memoized, so shared sub-dependencies reached from multiple consumers
//! are computed once and every consumer sees the identical product.
//!
//! # Cycles
//!
//! Every top-level resolution call threads an active-resolution stack of
//! (engine, key) frames through all recursive hops, including hops into
//! other engines. Re-entering a frame that is still active fails with
//! [`ResolveError::CycleDetected`] carrying the offending path instead of
//! recursing without bound.
//!
//! # Execution Model
//!
//! Resolution is single-threaded, synchronous, and non-suspending.
//! Generators run sequentially in an unspecified order; generators must not
//! rely on sibling ordering. All registration must complete before the
//! first resolution begins; interleaving the two is undefined.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::rc::Rc;

use super::cached::CachedGenerator;
use super::dependency::Dependency;
use super::entry::{Entry, EntryDependency};
use crate::errors::ResolveError;
use crate::observability::messages::engine::{
    EntryRegistered, ResolutionCompleted, ResolutionFailed, ResolutionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Generator;

/// A dependency generation engine.
///
/// An engine owns an id, a fixed snapshot of initials (pre-supplied
/// products), an entry table mapping keys to registered generators, and one
/// memo slot per entry. `Depengine` itself is a cheap-clonable handle over
/// shared state: clones refer to the same engine instance, which is what
/// lets dependency handles keep their owning engine alive.
///
/// Keys are opaque identifiers (`Eq + Hash + Clone + Display`); products are
/// opaque values (`Clone`). The engine never inspects product values.
///
/// ```rust
/// use std::collections::HashMap;
/// use depengine::engine::Depengine;
///
/// let initials = HashMap::from([
///     ("first_name".to_string(), "jon".to_string()),
///     ("last_name".to_string(), "anderson".to_string()),
/// ]);
/// let engine = Depengine::with_initials("names", initials);
///
/// engine.register(
///     "full_name".to_string(),
///     |deps: &HashMap<String, String>| format!("{}{}", deps["first_name"], deps["last_name"]),
///     vec![
///         engine.dependency("first_name".to_string()),
///         engine.dependency("last_name".to_string()),
///     ],
/// );
///
/// let products = engine.resolve_all().unwrap();
/// assert_eq!(products["full_name"], "jonanderson");
/// ```
pub struct Depengine<K, P> {
    inner: Rc<EngineInner<K, P>>,
}

struct EngineInner<K, P> {
    id: String,
    initials: HashMap<K, P>,
    entries: RefCell<HashMap<K, Rc<Entry<K, P>>>>,
}

impl<K, P> Depengine<K, P>
where
    K: Eq + Hash + Clone + Display,
    P: Clone,
{
    /// Creates an engine with no initials.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_initials(id, HashMap::new())
    }

    /// Creates an engine with a snapshot of pre-supplied products. An
    /// initial is only consulted for keys with no registered entry.
    pub fn with_initials(id: impl Into<String>, initials: HashMap<K, P>) -> Self {
        Depengine {
            inner: Rc::new(EngineInner {
                id: id.into(),
                initials,
                entries: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// The id of this engine, used for failure attribution.
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Registers a generator under `key`.
    ///
    /// The generator is wrapped so its product is generated at most once.
    /// Dependency handles naming the same (engine, key) twice collapse to
    /// one. Re-registering a key silently replaces the previous entry.
    pub fn register<G, D>(&self, key: K, generator: G, dependencies: D)
    where
        G: Generator<K, P> + 'static,
        D: IntoIterator<Item = Dependency<K, P>>,
    {
        let mut deduplicated: Vec<EntryDependency<K, P>> = Vec::new();
        for dependency in dependencies {
            // A handle targeting this engine is stored as a bare key; the
            // strong form inside our own entry table would be an `Rc`
            // cycle and the engine would never be freed.
            let stored = if dependency.is_owned_by(self) {
                EntryDependency::Local {
                    key: dependency.into_key(),
                }
            } else {
                EntryDependency::Foreign(dependency)
            };
            if !deduplicated.iter().any(|d| d.same_target(&stored)) {
                deduplicated.push(stored);
            }
        }

        let key_repr = key.to_string();
        EntryRegistered {
            engine_id: self.id(),
            key: &key_repr,
            dependency_count: deduplicated.len(),
        }
        .log();

        self.inner.entries.borrow_mut().insert(
            key,
            Rc::new(Entry::new(CachedGenerator::new(generator), deduplicated)),
        );
    }

    /// Creates a handle to a product provided by this engine. The handle
    /// can be declared locally or passed to another engine's `register`.
    pub fn dependency(&self, key: K) -> Dependency<K, P> {
        Dependency::new(self.clone(), key)
    }

    /// Resolves a single product, generating any dependencies necessary.
    pub fn resolve(&self, key: &K) -> Result<P, ResolveError> {
        let mut stack = ResolutionStack::new();
        self.resolve_with(key, &mut stack)
    }

    /// Resolves every registered key, returning the products as values in a
    /// map under their entry keys.
    ///
    /// Initials-only keys are not included unless also registered. The call
    /// is all-or-nothing: any single key's failure aborts it with no
    /// partial results. Iteration order is unspecified and does not affect
    /// the outcome; shared sub-dependencies are generated once thanks to
    /// the per-entry memo.
    pub fn resolve_all(&self) -> Result<HashMap<K, P>, ResolveError> {
        let keys: Vec<K> = self.inner.entries.borrow().keys().cloned().collect();

        ResolutionStarted {
            engine_id: self.id(),
            entry_count: keys.len(),
        }
        .log();

        let mut products = HashMap::with_capacity(keys.len());
        for key in keys {
            match self.resolve(&key) {
                Ok(product) => {
                    products.insert(key, product);
                }
                Err(error) => {
                    ResolutionFailed {
                        engine_id: self.id(),
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            }
        }

        ResolutionCompleted {
            engine_id: self.id(),
            product_count: products.len(),
        }
        .log();
        Ok(products)
    }

    pub(crate) fn resolve_with(
        &self,
        key: &K,
        stack: &mut ResolutionStack<K>,
    ) -> Result<P, ResolveError> {
        // Clone the entry handle out of the table so no borrow is held
        // across the recursive calls below.
        let entry = self.inner.entries.borrow().get(key).cloned();

        if let Some(entry) = entry {
            stack.enter(self.state_ptr(), self.id(), key)?;

            let mut resolved = HashMap::with_capacity(entry.dependencies().len());
            for dependency in entry.dependencies() {
                let outcome = match dependency {
                    EntryDependency::Local { key } => self.resolve_with(key, stack),
                    EntryDependency::Foreign(handle) => handle.resolve_with(stack),
                };
                match outcome {
                    Ok(product) => {
                        resolved.insert(dependency.key().clone(), product);
                    }
                    Err(error) => {
                        stack.leave();
                        // This frame declared the failing handle, so it is
                        // the direct consumer; frames further up pass the
                        // failure through unchanged.
                        return Err(error.attributed_to(self.id()));
                    }
                }
            }
            stack.leave();

            Ok(entry.generate(&resolved))
        } else if let Some(initial) = self.inner.initials.get(key) {
            Ok(initial.clone())
        } else {
            // The destination is unknown at the point of absence; the first
            // ancestor frame that declared the handle fills it in.
            Err(ResolveError::MissingProduct {
                key: key.to_string(),
                source: self.id().to_string(),
                destination: None,
            })
        }
    }

    pub(crate) fn shares_state_with(&self, other: &Depengine<K, P>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn state_ptr(&self) -> *const () {
        Rc::as_ptr(&self.inner) as *const ()
    }
}

impl<K, P> Clone for Depengine<K, P> {
    fn clone(&self) -> Self {
        Depengine {
            inner: Rc::clone(&self.inner),
        }
    }
}

// Manual impl: keys and products are opaque, so only the id is rendered.
impl<K, P> fmt::Debug for Depengine<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Depengine")
            .field("id", &self.inner.id)
            .finish_non_exhaustive()
    }
}

/// Active (engine, key) frames for one top-level resolution call.
///
/// The stack is threaded through every recursive hop, including hops into
/// other engines, so cycles spanning engine boundaries are caught as well.
pub(crate) struct ResolutionStack<K> {
    frames: Vec<Frame<K>>,
}

struct Frame<K> {
    engine: *const (),
    engine_id: String,
    key: K,
}

impl<K> ResolutionStack<K>
where
    K: Eq + Clone + Display,
{
    pub(crate) fn new() -> Self {
        ResolutionStack { frames: Vec::new() }
    }

    /// Marks an (engine, key) pair active, failing if it already is.
    pub(crate) fn enter(
        &mut self,
        engine: *const (),
        engine_id: &str,
        key: &K,
    ) -> Result<(), ResolveError> {
        if let Some(position) = self
            .frames
            .iter()
            .position(|frame| frame.engine == engine && frame.key == *key)
        {
            let mut path: Vec<String> = self.frames[position..]
                .iter()
                .map(|frame| format!("{}:{}", frame.engine_id, frame.key))
                .collect();
            path.push(format!("{}:{}", engine_id, key));
            return Err(ResolveError::CycleDetected { path });
        }

        self.frames.push(Frame {
            engine,
            engine_id: engine_id.to_string(),
            key: key.clone(),
        });
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.frames.pop();
    }
}
