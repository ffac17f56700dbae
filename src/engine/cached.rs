// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::OnceCell;
use std::collections::HashMap;

use crate::traits::Generator;

/// Wraps a generator so its product is generated at most once.
///
/// The first invocation runs the wrapped generator with the supplied
/// dependency mapping and memoizes the product. Every later invocation
/// returns the memoized product unconditionally, ignoring whatever mapping
/// is passed.
pub(crate) struct CachedGenerator<K, P> {
    generator: Box<dyn Generator<K, P>>,
    product: OnceCell<P>,
}

impl<K, P: Clone> CachedGenerator<K, P> {
    pub(crate) fn new<G>(generator: G) -> Self
    where
        G: Generator<K, P> + 'static,
    {
        CachedGenerator {
            generator: Box::new(generator),
            product: OnceCell::new(),
        }
    }

    pub(crate) fn generate(&self, dependencies: &HashMap<K, P>) -> P {
        self.product
            .get_or_init(|| self.generator.generate(dependencies))
            .clone()
    }
}
