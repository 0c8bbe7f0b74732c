// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use super::{text_input, INPUT_SLOT, OUTPUT_SLOT};
use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

/// Reverse Text module - reverses the `input` string by character
#[derive(Debug, Default)]
pub struct ReverseTextModule;

impl ReverseTextModule {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for ReverseTextModule {
    fn input_keys(&self) -> InputKeys {
        InputKeys::from_required([INPUT_SLOT])
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots([OUTPUT_SLOT])
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let reversed: String = text_input(&inputs, INPUT_SLOT)?.chars().rev().collect();

        Ok(ModuleOutputs::from([(
            OUTPUT_SLOT.to_string(),
            Value::String(reversed),
        )]))
    }

    fn name(&self) -> &'static str {
        "reverse_text"
    }
}
