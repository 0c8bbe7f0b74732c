// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::modules::*;
use crate::config::ModuleConfig;
use crate::errors::ConfigError;
use crate::traits::Module;

/// Factory for creating local (in-process) module instances
pub struct LocalModuleFactory;

impl LocalModuleFactory {
    /// Create a module instance from configuration
    ///
    /// The `processor` field in the config determines which module to create:
    /// - "change_text_case_upper" -> ChangeTextCaseModule (uppercase)
    /// - "change_text_case_lower" -> ChangeTextCaseModule (lowercase)
    /// - "change_text_case_proper" -> ChangeTextCaseModule (proper case)
    /// - "change_text_case_title" -> ChangeTextCaseModule (title case)
    /// - "reverse_text" -> ReverseTextModule
    /// - "token_counter" -> TokenCounterModule
    /// - "prefix_suffix_adder" -> PrefixSuffixAdderModule (`prefix` / `suffix` options)
    /// - "template" -> TemplateModule (`template` option, required)
    pub fn create_module(config: &ModuleConfig) -> Result<Arc<dyn Module>, ConfigError> {
        let module_id = config.display_id();
        let processor = config
            .processor
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField {
                module_id: module_id.clone(),
                field: "processor",
            })?;

        match processor {
            "change_text_case_upper" => Ok(Arc::new(ChangeTextCaseModule::upper())),
            "change_text_case_lower" => Ok(Arc::new(ChangeTextCaseModule::lower())),
            "change_text_case_proper" => Ok(Arc::new(ChangeTextCaseModule::proper())),
            "change_text_case_title" => Ok(Arc::new(ChangeTextCaseModule::title())),

            "reverse_text" => Ok(Arc::new(ReverseTextModule::new())),
            "token_counter" => Ok(Arc::new(TokenCounterModule::new())),

            "prefix_suffix_adder" => Ok(Arc::new(PrefixSuffixAdderModule::new(PrefixSuffixConfig {
                prefix: string_option(config, "prefix")?,
                suffix: string_option(config, "suffix")?,
            }))),

            "template" => {
                let template = string_option(config, "template")?.ok_or(ConfigError::MissingField {
                    module_id,
                    field: "options.template",
                })?;
                Ok(Arc::new(TemplateModule::new(template)))
            }

            _ => Err(ConfigError::UnknownProcessor(processor.to_string())),
        }
    }

    /// List all available local module implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "change_text_case_upper",
            "change_text_case_lower",
            "change_text_case_proper",
            "change_text_case_title",
            "reverse_text",
            "token_counter",
            "prefix_suffix_adder",
            "template",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

/// Read an optional string option; any other value type is rejected.
fn string_option(config: &ModuleConfig, option: &str) -> Result<Option<String>, ConfigError> {
    match config.options.get(option) {
        None => Ok(None),
        Some(serde_yaml::Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(ConfigError::InvalidOption {
            module_id: config.display_id(),
            option: option.to_string(),
            reason: format!("expected a string, got {:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendType;
    use crate::traits::ModuleInputs;
    use serde_json::json;
    use std::collections::HashMap;

    fn create_test_config(id: &str, processor: &str) -> ModuleConfig {
        ModuleConfig {
            id: Some(id.to_string()),
            backend: BackendType::Local,
            processor: Some(processor.to_string()),
            pipeline: None,
            options: HashMap::new(),
        }
    }

    async fn run_text(module: Arc<dyn Module>, input: &str) -> serde_json::Value {
        let inputs = ModuleInputs::from([(INPUT_SLOT.to_string(), json!(input))]);
        let mut outputs = module.run_component(inputs).await.unwrap();
        outputs.remove(OUTPUT_SLOT).unwrap()
    }

    #[tokio::test]
    async fn test_create_text_modules() {
        let test_cases = vec![
            ("change_text_case_upper", "hello", "HELLO"),
            ("change_text_case_lower", "HELLO", "hello"),
            ("change_text_case_proper", "hello world", "Hello World"),
            ("change_text_case_title", "the quick brown fox", "The Quick Brown Fox"),
            ("reverse_text", "hello", "olleh"),
        ];

        for (processor, input, expected) in test_cases {
            let config = create_test_config("test", processor);
            let module = LocalModuleFactory::create_module(&config)
                .unwrap_or_else(|e| panic!("Failed to create module {}: {}", processor, e));

            assert_eq!(run_text(module, input).await, json!(expected), "processor: {}", processor);
        }
    }

    #[tokio::test]
    async fn test_create_prefix_suffix_adder_from_options() {
        let mut config = create_test_config("wrap", "prefix_suffix_adder");
        config.options.insert("prefix".to_string(), serde_yaml::Value::from("<"));
        config.options.insert("suffix".to_string(), serde_yaml::Value::from(">"));

        let module = LocalModuleFactory::create_module(&config).unwrap();

        assert_eq!(run_text(module, "tag").await, json!("<tag>"));
    }

    #[test]
    fn test_create_template_requires_template_option() {
        let config = create_test_config("render", "template");

        let result = LocalModuleFactory::create_module(&config);

        assert!(matches!(
            result,
            Err(ConfigError::MissingField { module_id, field: "options.template" }) if module_id == "render"
        ));
    }

    #[test]
    fn test_non_string_option_rejected() {
        let mut config = create_test_config("wrap", "prefix_suffix_adder");
        config.options.insert("prefix".to_string(), serde_yaml::Value::from(7));

        let result = LocalModuleFactory::create_module(&config);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidOption { option, .. }) if option == "prefix"
        ));
    }

    #[test]
    fn test_create_module_missing_processor() {
        let mut config = create_test_config("test", "");
        config.processor = None;

        let result = LocalModuleFactory::create_module(&config);

        let error_msg = result.err().unwrap().to_string();
        assert_eq!(error_msg, "Module 'test' is missing the 'processor' field");
    }

    #[test]
    fn test_create_module_unknown_processor() {
        let config = create_test_config("test", "unknown_processor");

        let result = LocalModuleFactory::create_module(&config);

        assert!(matches!(result, Err(ConfigError::UnknownProcessor(name)) if name == "unknown_processor"));
    }

    #[test]
    fn test_list_available_implementations() {
        let implementations = LocalModuleFactory::list_available_implementations();
        assert!(implementations.contains(&"change_text_case_upper"));
        assert!(implementations.contains(&"template"));

        for name in implementations {
            assert!(LocalModuleFactory::is_implementation_available(name));
        }
        assert!(!LocalModuleFactory::is_implementation_available("word_frequency_analyzer"));
    }
}
