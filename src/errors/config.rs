// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading pipeline descriptions and turning them into pipelines.

use thiserror::Error;

use crate::errors::PipelineError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML pipeline description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML pipeline description: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported pipeline description format: '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("Module '{module_id}' is missing the '{field}' field")]
    MissingField {
        module_id: String,
        field: &'static str,
    },

    #[error("Unknown local processor implementation: '{0}'")]
    UnknownProcessor(String),

    #[error("Invalid option '{option}' for module '{module_id}': {reason}")]
    InvalidOption {
        module_id: String,
        option: String,
        reason: String,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
