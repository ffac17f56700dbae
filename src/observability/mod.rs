// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the engine. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - registration and resolution lifecycle events
//! * `messages::blueprint` - blueprint loading and validation events

pub mod messages;
