// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline runs.
//!
//! This module contains message types for logging events related to:
//! * Run lifecycle (start, completion, failure)
//! * Module execution inside a run
//! * Work queue scheduling decisions

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Pipeline run started from its single root.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dagwood_pipeline::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     root_key: "input",
///     module_count: 3,
///     link_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub root_key: &'a str,
    pub module_count: usize,
    pub link_count: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting pipeline run from root '{}': {} modules, {} links",
            self.root_key, self.module_count, self.link_count
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            root_key = self.root_key,
            module_count = self.module_count,
            link_count = self.link_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run",
            span_name = name,
            root_key = self.root_key,
            module_count = self.module_count,
            link_count = self.link_count,
        )
    }
}

/// Pipeline run finished with a single terminal result.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted {
    pub modules_executed: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline run completed: {} modules executed in {:?}",
            self.modules_executed, self.duration
        )
    }
}

impl StructuredLog for RunCompleted {
    fn log(&self) {
        tracing::info!(
            modules_executed = self.modules_executed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_run_completed",
            span_name = name,
            modules_executed = self.modules_executed,
            duration = ?self.duration,
        )
    }
}

/// Pipeline run aborted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RunFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for RunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Pipeline run failed: {}", self.error)
    }
}

impl StructuredLog for RunFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("pipeline_run_failed", span_name = name, error = %self.error)
    }
}

/// A module was popped from the queue and is about to run.
///
/// # Log Level
/// `debug!` - Per-module detail
///
/// # Example
/// ```
/// use dagwood_pipeline::observability::messages::engine::ModuleExecutionStarted;
///
/// let msg = ModuleExecutionStarted {
///     module_key: "summarizer",
///     module_name: "template",
///     input_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ModuleExecutionStarted<'a> {
    pub module_key: &'a str,
    pub module_name: &'a str,
    pub input_count: usize,
}

impl Display for ModuleExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running module '{}' ({}) with {} inputs",
            self.module_key, self.module_name, self.input_count
        )
    }
}

impl StructuredLog for ModuleExecutionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            module_key = self.module_key,
            module_name = self.module_name,
            input_count = self.input_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "module_execution",
            span_name = name,
            module_key = self.module_key,
            module_name = self.module_name,
            input_count = self.input_count,
        )
    }
}

/// A module finished and produced its outputs.
///
/// # Log Level
/// `debug!` - Per-module detail
pub struct ModuleExecutionCompleted<'a> {
    pub module_key: &'a str,
    pub output_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ModuleExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' completed: {} outputs in {:?}",
            self.module_key, self.output_count, self.duration
        )
    }
}

impl StructuredLog for ModuleExecutionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            module_key = self.module_key,
            output_count = self.output_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "module_execution_completed",
            span_name = name,
            module_key = self.module_key,
            output_count = self.output_count,
            duration = ?self.duration,
        )
    }
}

/// A module's operation returned an error. The run stops here.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use dagwood_pipeline::errors::ModuleError;
/// use dagwood_pipeline::observability::messages::engine::ModuleExecutionFailed;
///
/// let error = ModuleError::Failed("index offline".to_string());
/// let msg = ModuleExecutionFailed {
///     module_key: "retriever",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ModuleExecutionFailed<'a> {
    pub module_key: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ModuleExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' execution failed: {}",
            self.module_key, self.error
        )
    }
}

impl StructuredLog for ModuleExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            module_key = self.module_key,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "module_execution_failed",
            span_name = name,
            module_key = self.module_key,
            error = %self.error,
        )
    }
}

/// A module's inputs are complete and it joined the work queue.
///
/// # Log Level
/// `trace!` - Scheduling detail
pub struct ModuleQueued<'a> {
    pub module_key: &'a str,
    pub queue_len: usize,
}

impl Display for ModuleQueued<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Module '{}' ready, queue length {}",
            self.module_key, self.queue_len
        )
    }
}

impl StructuredLog for ModuleQueued<'_> {
    fn log(&self) {
        tracing::trace!(
            module_key = self.module_key,
            queue_len = self.queue_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "module_queued",
            span_name = name,
            module_key = self.module_key,
            queue_len = self.queue_len,
        )
    }
}
