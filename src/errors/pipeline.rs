// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building or running a pipeline.

use std::fmt;
use thiserror::Error;

use crate::errors::ModuleError;

/// Which end of a link an ambiguous slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSide {
    /// The source module's outputs.
    Source,
    /// The destination module's declared inputs.
    Destination,
}

impl fmt::Display for SlotSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSide::Source => write!(f, "source output"),
            SlotSide::Destination => write!(f, "destination input"),
        }
    }
}

/// Every way building or running a pipeline can fail.
///
/// None of these are retried. They surface from the `add*`/`run` call that hit them.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Module '{0}' already exists in pipeline")]
    DuplicateKey(String),

    #[error("Module '{0}' does not exist in pipeline")]
    UnknownModule(String),

    #[error("Module '{0}' cannot be its own ancestor")]
    SelfAncestry(String),

    /// A link omitted a slot name but that side does not have exactly one slot.
    #[error(
        "Link {src} -> {dest} omits the {side} slot, but {count} {side} slots are available (exactly one required)"
    )]
    AmbiguousSlot {
        src: String,
        dest: String,
        side: SlotSide,
        count: usize,
    },

    /// A link named a destination slot the module does not declare.
    #[error("Module '{module_key}' does not declare input slot '{slot}'")]
    UndeclaredInputSlot { module_key: String, slot: String },

    /// A link named a source slot the module did not produce.
    #[error("Module '{module_key}' did not produce output slot '{slot}'")]
    MissingOutputSlot { module_key: String, slot: String },

    #[error("Pipeline has no root module (every module has an upstream link)")]
    NoRoot,

    #[error("Only one root is supported, found {}: [{}]", roots.len(), roots.join(", "))]
    MultipleRoots { roots: Vec<String> },

    #[error("Only one leaf is supported, found {}: [{}]", leaves.len(), leaves.join(", "))]
    MultipleLeaves { leaves: Vec<String> },

    #[error("Only one output is supported, pipeline produced {count}")]
    MultipleOutputs { count: usize },

    #[error("Cyclic link rejected: {}", cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    #[error("{0} is not supported")]
    NotSupported(&'static str),

    #[error("Module '{module_key}' failed: {source}")]
    ModuleFailed {
        module_key: String,
        #[source]
        source: ModuleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let test_cases = vec![
            (
                PipelineError::DuplicateKey("llm".to_string()),
                "Module 'llm' already exists in pipeline",
            ),
            (
                PipelineError::MultipleRoots {
                    roots: vec!["a".to_string(), "b".to_string()],
                },
                "Only one root is supported, found 2: [a, b]",
            ),
            (
                PipelineError::AmbiguousSlot {
                    src: "a".to_string(),
                    dest: "b".to_string(),
                    side: SlotSide::Destination,
                    count: 2,
                },
                "Link a -> b omits the destination input slot, but 2 destination input slots are available (exactly one required)",
            ),
            (
                PipelineError::CycleDetected {
                    cycle: vec!["a".to_string(), "b".to_string(), "a".to_string()],
                },
                "Cyclic link rejected: a -> b -> a",
            ),
            (
                PipelineError::UndeclaredInputSlot {
                    module_key: "join".to_string(),
                    slot: "typo".to_string(),
                },
                "Module 'join' does not declare input slot 'typo'",
            ),
            (
                PipelineError::NotSupported("run_multi"),
                "run_multi is not supported",
            ),
        ];

        for (error, expected) in test_cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_module_failure_keeps_source() {
        use std::error::Error;

        let error = PipelineError::ModuleFailed {
            module_key: "retriever".to_string(),
            source: ModuleError::Failed("index offline".to_string()),
        };

        assert_eq!(
            error.to_string(),
            "Module 'retriever' failed: Module execution failed: index offline"
        );
        assert!(error.source().is_some());
    }
}
