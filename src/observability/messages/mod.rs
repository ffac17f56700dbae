// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for a human-readable rendering
//! and [`StructuredLog`] to emit itself through `tracing` with structured
//! fields attached.
//!
//! # Usage Pattern
//!
//! ```rust
//! use depengine::observability::messages::engine::ResolutionStarted;
//! use depengine::observability::messages::StructuredLog;
//!
//! let msg = ResolutionStarted {
//!     engine_id: "names",
//!     entry_count: 2,
//! };
//!
//! msg.log();
//! ```

use std::fmt::Display;

use tracing::Span;

pub mod blueprint;
pub mod engine;

/// Emits a message through `tracing` at the level appropriate for the
/// event, with structured fields alongside the rendered text.
pub trait StructuredLog: Display {
    /// Log this message with structured fields.
    fn log(&self);

    /// Create a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
