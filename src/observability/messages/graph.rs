// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline construction.
//!
//! This module contains message types for logging events related to:
//! * Module registration
//! * Link insertion and cycle rejection
//! * Nested pipelines whose shape cannot be described as a module

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Module registered under a key.
///
/// # Log Level
/// `debug!` - Construction detail
pub struct ModuleAdded<'a> {
    pub module_key: &'a str,
    pub module_name: &'a str,
}

impl Display for ModuleAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Added module '{}' ({})",
            self.module_key, self.module_name
        )
    }
}

impl StructuredLog for ModuleAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            module_key = self.module_key,
            module_name = self.module_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "module_added",
            span_name = name,
            module_key = self.module_key,
            module_name = self.module_name,
        )
    }
}

/// Link inserted into the edge index.
///
/// # Log Level
/// `debug!` - Construction detail
///
/// # Example
/// ```
/// use dagwood_pipeline::observability::messages::graph::LinkAdded;
///
/// let msg = LinkAdded {
///     src: "retriever",
///     dest: "synthesizer",
///     src_slot: Some("nodes"),
///     dest_slot: None,
/// };
///
/// assert_eq!(msg.to_string(), "Added link retriever.nodes -> synthesizer.<default>");
/// ```
pub struct LinkAdded<'a> {
    pub src: &'a str,
    pub dest: &'a str,
    pub src_slot: Option<&'a str>,
    pub dest_slot: Option<&'a str>,
}

const DEFAULT_SLOT: &str = "<default>";

impl Display for LinkAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Added link {}.{} -> {}.{}",
            self.src,
            self.src_slot.unwrap_or(DEFAULT_SLOT),
            self.dest,
            self.dest_slot.unwrap_or(DEFAULT_SLOT)
        )
    }
}

impl StructuredLog for LinkAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            src = self.src,
            dest = self.dest,
            src_slot = self.src_slot.unwrap_or(DEFAULT_SLOT),
            dest_slot = self.dest_slot.unwrap_or(DEFAULT_SLOT),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "link_added",
            span_name = name,
            src = self.src,
            dest = self.dest,
        )
    }
}

/// A link would have closed a cycle and was not inserted.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use dagwood_pipeline::observability::messages::graph::CyclicLinkRejected;
///
/// let cycle = vec!["a".to_string(), "b".to_string(), "a".to_string()];
/// let msg = CyclicLinkRejected { cycle: &cycle };
///
/// assert_eq!(msg.to_string(), "Rejected link closing cycle: a -> b -> a");
/// ```
pub struct CyclicLinkRejected<'a> {
    pub cycle: &'a [String],
}

impl Display for CyclicLinkRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected link closing cycle: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicLinkRejected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "cyclic_link_rejected",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// A nested pipeline was asked for its slots but has no single root or leaf.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct NestedPipelineShapeInvalid<'a> {
    pub side: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for NestedPipelineShapeInvalid<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Nested pipeline cannot declare {} slots, reporting none: {}",
            self.side, self.error
        )
    }
}

impl StructuredLog for NestedPipelineShapeInvalid<'_> {
    fn log(&self) {
        tracing::warn!(side = self.side, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "nested_pipeline_shape_invalid",
            span_name = name,
            side = self.side,
            error = %self.error,
        )
    }
}
