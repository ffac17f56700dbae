// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod blueprint;
mod resolve;

pub use blueprint::{BlueprintError, ValidationError};
pub use resolve::ResolveError;
