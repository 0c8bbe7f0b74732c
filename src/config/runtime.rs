// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::backends::local::LocalModuleFactory;
use crate::config::{BackendType, ModuleConfig, PipelineConfig};
use crate::engine::Pipeline;
use crate::errors::ConfigError;
use crate::traits::Module;

/// Pipeline builder - turns a loaded description into a runnable [`Pipeline`].
///
/// Nested `pipeline` modules are built recursively and registered as ordinary
/// modules of the outer pipeline.
///
/// # Examples
///
/// ```
/// use dagwood_pipeline::config::{PipelineBuilder, PipelineConfig};
///
/// let config = PipelineConfig::from_yaml_str(r#"
/// chain:
///   - type: local
///     processor: change_text_case_upper
///   - type: local
///     processor: reverse_text
/// "#)?;
///
/// let pipeline = PipelineBuilder::from_config(&config)?;
///
/// assert_eq!(pipeline.modules().len(), 2);
/// # Ok::<(), dagwood_pipeline::errors::ConfigError>(())
/// ```
pub struct PipelineBuilder;

impl PipelineBuilder {
    /// Build a pipeline from configuration.
    ///
    /// Modules are registered in file order, then links, then the `chain`.
    /// Every graph rule `Pipeline` enforces applies here too: duplicate ids,
    /// links to unknown ids and cyclic links surface as `ConfigError::Pipeline`.
    pub fn from_config(cfg: &PipelineConfig) -> Result<Pipeline, ConfigError> {
        let mut pipeline = Pipeline::new();

        for module_config in &cfg.modules {
            let id = module_config.id.clone().ok_or_else(|| ConfigError::MissingField {
                module_id: module_config.display_id(),
                field: "id",
            })?;
            pipeline.add(id, Self::build_module(module_config)?)?;
        }

        for link in &cfg.links {
            pipeline.add_link(link.clone())?;
        }

        if !cfg.chain.is_empty() {
            let chain = cfg
                .chain
                .iter()
                .map(Self::build_module)
                .collect::<Result<Vec<_>, _>>()?;
            pipeline.add_chain(chain)?;
        }

        Ok(pipeline)
    }

    fn build_module(cfg: &ModuleConfig) -> Result<Arc<dyn Module>, ConfigError> {
        match cfg.backend {
            BackendType::Local => LocalModuleFactory::create_module(cfg),
            BackendType::Pipeline => {
                let nested = cfg.pipeline.as_deref().ok_or_else(|| ConfigError::MissingField {
                    module_id: cfg.display_id(),
                    field: "pipeline",
                })?;
                Ok(Arc::new(Self::from_config(nested)?))
            }
        }
    }
}
