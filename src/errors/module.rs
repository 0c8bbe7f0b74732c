// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::PipelineError;

/// Failures reported by a module's own operation.
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Missing required input slots: {}", slots.join(", "))]
    MissingInputs { slots: Vec<String> },

    #[error("Invalid input for slot '{slot}': {reason}")]
    InvalidInput { slot: String, reason: String },

    #[error("Module execution failed: {0}")]
    Failed(String),

    /// A nested pipeline failed while running as a module.
    #[error("Nested pipeline failed: {0}")]
    Pipeline(#[from] Box<PipelineError>),
}
