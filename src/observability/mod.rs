// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the pipeline engine. Message types follow a struct-based pattern with
//! a `Display` implementation so that:
//!
//! * log lines are not magic strings scattered through the engine
//! * every event carries the same structured fields wherever it is emitted
//! * the human-readable text and the field set live side by side
//!
//! Installing a subscriber is left to the binary; see `main.rs`.
//!
//! # Usage
//!
//! ```rust
//! use dagwood_pipeline::observability::messages::engine::ModuleExecutionFailed;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = ModuleExecutionFailed {
//!     module_key: "my_module",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
