// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::Link;
use crate::errors::ConfigError;

/// A pipeline description.
///
/// Modules and links are added first, in file order; `chain` is then appended as
/// a linear sequence under generated keys. The loaded description is typically
/// handed to [`PipelineBuilder`](crate::config::PipelineBuilder).
///
/// # Fields
/// * `modules` - Modules registered under explicit ids
/// * `links` - Slot-qualified links between those ids
/// * `chain` - Modules joined one after the other by default links (optional)
///
/// # Example
/// ```yaml
/// modules:
///   - id: upper
///     type: local
///     processor: change_text_case_upper
///   - id: wrap
///     type: local
///     processor: prefix_suffix_adder
///     options: { prefix: "[", suffix: "]" }
/// links:
///   - { src: upper, dest: wrap }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub chain: Vec<ModuleConfig>,
}

impl PipelineConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration for a single module in the pipeline.
///
/// # Fields
/// * `id` - Key the module is registered under; required in `modules`, ignored in `chain`
/// * `backend` - How the module is implemented
/// * `processor` - Implementation name (for local backends)
/// * `pipeline` - Nested pipeline description (for pipeline backends)
/// * `options` - Additional module-specific configuration options
///
/// # Example
/// ```yaml
/// id: "shout"
/// type: local
/// processor: "change_text_case_upper"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub backend: BackendType,
    pub processor: Option<String>,
    pub pipeline: Option<Box<PipelineConfig>>,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

impl ModuleConfig {
    /// The id for messages, or a placeholder naming the processor.
    pub fn display_id(&self) -> String {
        match (&self.id, &self.processor) {
            (Some(id), _) => id.clone(),
            (None, Some(processor)) => format!("<{}>", processor),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

/// Backend implementation type for modules.
///
/// # Variants
/// * `Local` - In-process implementation using native Rust code
/// * `Pipeline` - A nested pipeline run as a single module
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum BackendType {
    Local,
    Pipeline,
}

/// Load a pipeline description, YAML or TOML by file extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => PipelineConfig::from_yaml_str(&fs::read_to_string(path)?),
        "toml" => PipelineConfig::from_toml_str(&fs::read_to_string(path)?),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}
