// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use super::{text_input, INPUT_SLOT, OUTPUT_SLOT};
use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseType {
    Upper,
    Lower,
    /// First letter of every word capitalized.
    Proper,
    /// Like `Proper`, but short articles, conjunctions and prepositions stay
    /// lowercase unless they open the text.
    Title,
}

/// Configuration for the Change Text Case module
#[derive(Debug, Clone)]
pub struct ChangeTextCaseConfig {
    pub case_type: CaseType,
}

/// Change Text Case module - rewrites the `input` string in the configured case
pub struct ChangeTextCaseModule {
    config: ChangeTextCaseConfig,
}

impl ChangeTextCaseModule {
    pub fn new(config: ChangeTextCaseConfig) -> Self {
        Self { config }
    }

    pub fn upper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Upper,
        })
    }

    pub fn lower() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Lower,
        })
    }

    pub fn proper() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Proper,
        })
    }

    pub fn title() -> Self {
        Self::new(ChangeTextCaseConfig {
            case_type: CaseType::Title,
        })
    }

    fn convert(&self, input: &str) -> String {
        match self.config.case_type {
            CaseType::Upper => input.to_uppercase(),
            CaseType::Lower => input.to_lowercase(),
            CaseType::Proper => input
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            CaseType::Title => input
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let lower_word = word.to_lowercase();
                    if i > 0 && is_minor_word(&lower_word) {
                        lower_word
                    } else {
                        capitalize(word)
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

fn is_minor_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to" | "for" | "of"
            | "with" | "by"
    )
}

#[async_trait]
impl Module for ChangeTextCaseModule {
    fn input_keys(&self) -> InputKeys {
        InputKeys::from_required([INPUT_SLOT])
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots([OUTPUT_SLOT])
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let input = text_input(&inputs, INPUT_SLOT)?;
        let result = self.convert(input);

        Ok(ModuleOutputs::from([(
            OUTPUT_SLOT.to_string(),
            Value::String(result),
        )]))
    }

    fn name(&self) -> &'static str {
        "change_text_case"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_change_text_case() {
        let test_cases = vec![
            (ChangeTextCaseModule::upper(), "hello world", "HELLO WORLD"),
            (ChangeTextCaseModule::lower(), "HeLLo WoRLD", "hello world"),
            (ChangeTextCaseModule::proper(), "the QUICK brown fox", "The Quick Brown Fox"),
            (
                ChangeTextCaseModule::title(),
                "the lord of the rings",
                "The Lord of the Rings",
            ),
            (ChangeTextCaseModule::proper(), "", ""),
        ];

        for (module, input, expected) in test_cases {
            let inputs = ModuleInputs::from([(INPUT_SLOT.to_string(), json!(input))]);
            let outputs = module.run_component(inputs).await.unwrap();
            assert_eq!(outputs[OUTPUT_SLOT], json!(expected), "input: {:?}", input);
        }
    }

    #[tokio::test]
    async fn test_non_string_input_rejected() {
        let module = ChangeTextCaseModule::upper();
        let inputs = ModuleInputs::from([(INPUT_SLOT.to_string(), json!(["not", "text"]))]);

        let result = module.run_component(inputs).await;

        assert!(matches!(result, Err(ModuleError::InvalidInput { slot, .. }) if slot == INPUT_SLOT));
    }
}
