// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The generator abstraction: host-supplied logic that produces a product
//! from already-resolved dependency products.

use std::collections::HashMap;

/// A generator produces one product from the products it depends on.
///
/// The engine calls `generate` with a mapping from dependency key to the
/// resolved product for that key. Keys in the mapping are the keys declared
/// on the dependency handles, i.e. the producing engine's local key names.
/// The engine never inspects the returned product; it only routes it by key.
///
/// Any closure or function of the shape `Fn(&HashMap<K, P>) -> P` is a
/// generator via the blanket implementation below, so hosts rarely need to
/// implement this trait by hand:
///
/// ```rust
/// use std::collections::HashMap;
/// use depengine::traits::Generator;
///
/// fn full_name(deps: &HashMap<String, String>) -> String {
///     format!("{}{}", deps["first_name"], deps["last_name"])
/// }
///
/// let deps = HashMap::from([
///     ("first_name".to_string(), "jon".to_string()),
///     ("last_name".to_string(), "anderson".to_string()),
/// ]);
/// assert_eq!(full_name.generate(&deps), "jonanderson");
/// ```
pub trait Generator<K, P> {
    /// Produce the product, given all declared dependencies resolved.
    fn generate(&self, dependencies: &HashMap<K, P>) -> P;
}

impl<K, P, F> Generator<K, P> for F
where
    F: Fn(&HashMap<K, P>) -> P,
{
    fn generate(&self, dependencies: &HashMap<K, P>) -> P {
        self(dependencies)
    }
}
