// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::json;

use super::{text_input, INPUT_SLOT};
use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

pub const CHAR_COUNT_SLOT: &str = "char_count";
pub const WORD_COUNT_SLOT: &str = "word_count";
pub const LINE_COUNT_SLOT: &str = "line_count";

/// Token Counter module - counts characters, words and lines
///
/// Each count is written to its own output slot, so a link downstream of this
/// module has to name the slot it wants.
#[derive(Debug, Default)]
pub struct TokenCounterModule;

impl TokenCounterModule {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for TokenCounterModule {
    fn input_keys(&self) -> InputKeys {
        InputKeys::from_required([INPUT_SLOT])
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots([CHAR_COUNT_SLOT, WORD_COUNT_SLOT, LINE_COUNT_SLOT])
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let input = text_input(&inputs, INPUT_SLOT)?;

        let char_count = input.chars().count();
        let word_count = input.split_whitespace().count();
        let line_count = input.lines().count().max(1); // At least 1 line even if empty

        Ok(ModuleOutputs::from([
            (CHAR_COUNT_SLOT.to_string(), json!(char_count)),
            (WORD_COUNT_SLOT.to_string(), json!(word_count)),
            (LINE_COUNT_SLOT.to_string(), json!(line_count)),
        ]))
    }

    fn name(&self) -> &'static str {
        "token_counter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_counter() {
        let module = TokenCounterModule::new();
        let inputs = ModuleInputs::from([(INPUT_SLOT.to_string(), json!("hello world\nsecond line"))]);

        let outputs = module.run_component(inputs).await.unwrap();

        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[CHAR_COUNT_SLOT], json!(23));
        assert_eq!(outputs[WORD_COUNT_SLOT], json!(4));
        assert_eq!(outputs[LINE_COUNT_SLOT], json!(2));
    }

    #[tokio::test]
    async fn test_empty_input_counts_one_line() {
        let module = TokenCounterModule::new();
        let inputs = ModuleInputs::from([(INPUT_SLOT.to_string(), json!(""))]);

        let outputs = module.run_component(inputs).await.unwrap();

        assert_eq!(outputs[WORD_COUNT_SLOT], json!(0));
        assert_eq!(outputs[LINE_COUNT_SLOT], json!(1));
    }
}
