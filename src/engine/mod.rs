// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod cached;
mod dependency;
mod depengine;
mod entry;

#[cfg(test)]
mod integration_tests;

pub use dependency::Dependency;
pub use depengine::Depengine;
