// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registration and resolution lifecycle events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A generator entry was registered with an engine.
///
/// # Log Level
/// `debug!` - Wiring detail, useful when diagnosing blueprint construction
pub struct EntryRegistered<'a> {
    pub engine_id: &'a str,
    pub key: &'a str,
    pub dependency_count: usize,
}

impl Display for EntryRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' registered entry '{}' with {} dependencies",
            self.engine_id, self.key, self.dependency_count
        )
    }
}

impl StructuredLog for EntryRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            engine_id = self.engine_id,
            key = self.key,
            dependency_count = self.dependency_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "entry_registered",
            span_name = name,
            engine_id = self.engine_id,
            key = self.key,
        )
    }
}

/// Full resolution started for an engine.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use depengine::observability::messages::engine::ResolutionStarted;
///
/// let msg = ResolutionStarted {
///     engine_id: "names",
///     entry_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ResolutionStarted<'a> {
    pub engine_id: &'a str,
    pub entry_count: usize,
}

impl Display for ResolutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' resolving {} registered entries",
            self.engine_id, self.entry_count
        )
    }
}

impl StructuredLog for ResolutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            engine_id = self.engine_id,
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "resolution",
            span_name = name,
            engine_id = self.engine_id,
            entry_count = self.entry_count,
        )
    }
}

/// Full resolution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ResolutionCompleted<'a> {
    pub engine_id: &'a str,
    pub product_count: usize,
}

impl Display for ResolutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' resolved {} products",
            self.engine_id, self.product_count
        )
    }
}

impl StructuredLog for ResolutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            engine_id = self.engine_id,
            product_count = self.product_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "resolution_completed",
            span_name = name,
            engine_id = self.engine_id,
            product_count = self.product_count,
        )
    }
}

/// Full resolution aborted on a failed key.
///
/// # Log Level
/// `error!` - Resolution produced no products
pub struct ResolutionFailed<'a> {
    pub engine_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' resolution failed: {}",
            self.engine_id, self.error
        )
    }
}

impl StructuredLog for ResolutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine_id = self.engine_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "resolution_failed",
            span_name = name,
            engine_id = self.engine_id,
        )
    }
}
