// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for blueprint loading and validation events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A blueprint file was loaded and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BlueprintLoaded<'a> {
    pub path: &'a str,
    pub engine_count: usize,
}

impl Display for BlueprintLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded blueprint '{}' with {} engines",
            self.path, self.engine_count
        )
    }
}

impl StructuredLog for BlueprintLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            engine_count = self.engine_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "blueprint_loaded",
            span_name = name,
            path = self.path,
            engine_count = self.engine_count,
        )
    }
}

/// Blueprint validation found one or more structural problems.
///
/// # Log Level
/// `warn!` - The blueprint cannot be built until fixed
pub struct BlueprintValidationFailed {
    pub error_count: usize,
}

impl Display for BlueprintValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Blueprint validation failed with {} error(s)",
            self.error_count
        )
    }
}

impl StructuredLog for BlueprintValidationFailed {
    fn log(&self) {
        tracing::warn!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "blueprint_validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}
