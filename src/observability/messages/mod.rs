// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with typed fields at the right level.
//!
//! # Organization
//!
//! * `engine` - pipeline runs and per-module execution events
//! * `graph` - pipeline construction events
//!
//! # Usage Pattern
//!
//! ```rust
//! use dagwood_pipeline::observability::messages::engine::RunStarted;
//! use dagwood_pipeline::observability::messages::StructuredLog;
//!
//! let msg = RunStarted {
//!     root_key: "retriever",
//!     module_count: 5,
//!     link_count: 4,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod engine;
pub mod graph;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at the message's level.
    fn log(&self);

    /// A span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
