// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Modules backed by a plain closure.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

/// The body of a [`FnModule`].
pub type ModuleFn = Arc<dyn Fn(ModuleInputs) -> Result<ModuleOutputs, ModuleError> + Send + Sync>;

/// A module whose work is a synchronous closure over its inputs.
///
/// ```rust
/// use dagwood_pipeline::backends::function::FnModule;
/// use dagwood_pipeline::traits::{InputKeys, ModuleOutputs, OutputKeys};
/// use serde_json::json;
///
/// let double = FnModule::new(
///     InputKeys::from_required(["n"]),
///     OutputKeys::from_slots(["doubled"]),
///     |inputs| {
///         let n = inputs["n"].as_i64().unwrap_or_default();
///         Ok(ModuleOutputs::from([("doubled".to_string(), json!(n * 2))]))
///     },
/// );
/// ```
#[derive(Clone)]
pub struct FnModule {
    input_keys: InputKeys,
    output_keys: OutputKeys,
    body: ModuleFn,
}

impl FnModule {
    pub fn new<F>(input_keys: InputKeys, output_keys: OutputKeys, body: F) -> Self
    where
        F: Fn(ModuleInputs) -> Result<ModuleOutputs, ModuleError> + Send + Sync + 'static,
    {
        Self {
            input_keys,
            output_keys,
            body: Arc::new(body),
        }
    }
}

impl fmt::Debug for FnModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule")
            .field("input_keys", &self.input_keys)
            .field("output_keys", &self.output_keys)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Module for FnModule {
    fn input_keys(&self) -> InputKeys {
        self.input_keys.clone()
    }

    fn output_keys(&self) -> OutputKeys {
        self.output_keys.clone()
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        (self.body)(inputs)
    }

    fn name(&self) -> &'static str {
        "function"
    }
}
