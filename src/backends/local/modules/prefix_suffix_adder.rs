// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use super::{text_input, INPUT_SLOT, OUTPUT_SLOT};
use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

/// Configuration for the Prefix/Suffix Adder module
#[derive(Debug, Clone, Default)]
pub struct PrefixSuffixConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Prefix/Suffix Adder module - wraps the `input` string
pub struct PrefixSuffixAdderModule {
    config: PrefixSuffixConfig,
}

impl PrefixSuffixAdderModule {
    pub fn new(config: PrefixSuffixConfig) -> Self {
        Self { config }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix.into()),
            suffix: None,
        })
    }

    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: None,
            suffix: Some(suffix.into()),
        })
    }

    pub fn with_prefix_and_suffix(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::new(PrefixSuffixConfig {
            prefix: Some(prefix.into()),
            suffix: Some(suffix.into()),
        })
    }
}

#[async_trait]
impl Module for PrefixSuffixAdderModule {
    fn input_keys(&self) -> InputKeys {
        InputKeys::from_required([INPUT_SLOT])
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots([OUTPUT_SLOT])
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let input = text_input(&inputs, INPUT_SLOT)?;
        let result = format!(
            "{}{}{}",
            self.config.prefix.as_deref().unwrap_or_default(),
            input,
            self.config.suffix.as_deref().unwrap_or_default()
        );

        Ok(ModuleOutputs::from([(
            OUTPUT_SLOT.to_string(),
            Value::String(result),
        )]))
    }

    fn name(&self) -> &'static str {
        "prefix_suffix_adder"
    }
}
