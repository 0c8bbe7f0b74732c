// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

/// A stub module for wiring tests.
///
/// Every output slot receives the same value: the lone input when there is exactly
/// one, otherwise all inputs as a JSON object.
pub struct StubModule {
    input_keys: InputKeys,
    output_keys: OutputKeys,
}

impl StubModule {
    /// One `input` slot, one `output` slot.
    pub fn new() -> Self {
        Self::with_keys(
            InputKeys::from_required(["input"]),
            OutputKeys::from_slots(["output"]),
        )
    }

    pub fn with_keys(input_keys: InputKeys, output_keys: OutputKeys) -> Self {
        Self {
            input_keys,
            output_keys,
        }
    }
}

#[async_trait]
impl Module for StubModule {
    fn input_keys(&self) -> InputKeys {
        self.input_keys.clone()
    }

    fn output_keys(&self) -> OutputKeys {
        self.output_keys.clone()
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let value = if inputs.len() == 1 {
            inputs.into_values().next().unwrap_or(Value::Null)
        } else {
            Value::Object(inputs.into_iter().collect())
        };

        Ok(self
            .output_keys
            .iter()
            .map(|slot| (slot.clone(), value.clone()))
            .collect())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// A module that always fails for testing failure scenarios
pub struct FailingModule {
    message: String,
}

impl FailingModule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Module for FailingModule {
    fn input_keys(&self) -> InputKeys {
        InputKeys::from_required(["input"])
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots(["output"])
    }

    async fn run_component(&self, _inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        Err(ModuleError::Failed(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Shared execution log written by [`RecordingModule`].
pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

/// Wraps another module and appends a label to a shared log each time it runs.
pub struct RecordingModule {
    label: String,
    inner: Arc<dyn Module>,
    log: ExecutionLog,
}

impl RecordingModule {
    pub fn new(label: impl Into<String>, inner: Arc<dyn Module>, log: ExecutionLog) -> Self {
        Self {
            label: label.into(),
            inner,
            log,
        }
    }
}

#[async_trait]
impl Module for RecordingModule {
    fn input_keys(&self) -> InputKeys {
        self.inner.input_keys()
    }

    fn output_keys(&self) -> OutputKeys {
        self.inner.output_keys()
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        self.log.lock().unwrap().push(self.label.clone());
        self.inner.run_component(inputs).await
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
