// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pipeline graph store and its execution entry points.
//!
//! A [`Pipeline`] owns the module registry and the edge index. It is built once
//! through `add`/`add_link`/`add_chain`/`add_modules` and can then be run any number
//! of times; every run gets its own accumulator and queue, so `&Pipeline` can be
//! shared across concurrent runs.
//!
//! # Examples
//!
//! ## A linear chain
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use dagwood_pipeline::backends::local::{ChangeTextCaseModule, ReverseTextModule};
//! use dagwood_pipeline::engine::Pipeline;
//! use dagwood_pipeline::traits::{Module, ModuleInputs};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = Pipeline::from_chain([
//!     Arc::new(ChangeTextCaseModule::upper()) as Arc<dyn Module>,
//!     Arc::new(ReverseTextModule::new()) as Arc<dyn Module>,
//! ])?;
//!
//! let inputs = ModuleInputs::from([("input".to_string(), json!("hello"))]);
//! let result = pipeline.run(inputs).await?;
//!
//! assert_eq!(result, json!("OLLEH"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Fan-in with named slots
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use dagwood_pipeline::backends::local::{ChangeTextCaseModule, ReverseTextModule, TemplateModule};
//! use dagwood_pipeline::config::Link;
//! use dagwood_pipeline::engine::Pipeline;
//! use dagwood_pipeline::traits::ModuleInputs;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pipeline = Pipeline::new();
//! pipeline.add("upper", Arc::new(ChangeTextCaseModule::upper()))?;
//! pipeline.add("reverse", Arc::new(ReverseTextModule::new()))?;
//! pipeline.add("join", Arc::new(TemplateModule::new("{loud} / {backwards}")))?;
//! pipeline.add_link(Link::new("upper", "reverse"))?;
//! pipeline.add_link(Link::new("upper", "join").with_dest_slot("loud"))?;
//! pipeline.add_link(Link::new("reverse", "join").with_dest_slot("backwards"))?;
//!
//! let inputs = ModuleInputs::from([("input".to_string(), json!("abc"))]);
//! assert_eq!(pipeline.run(inputs).await?, json!("ABC / CBA"));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Link, LinkMap, ModuleMap};
use crate::engine::scheduler::{unwrap_single_output, Scheduler};
use crate::engine::topology::{self, find_path};
use crate::errors::{ModuleError, PipelineError};
use crate::observability::messages::graph::{
    CyclicLinkRejected, LinkAdded, ModuleAdded, NestedPipelineShapeInvalid,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

/// A DAG of modules wired together by slot-qualified links.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    modules: ModuleMap,
    links: LinkMap,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pipeline made of one linear chain.
    pub fn from_chain<I>(chain: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        let mut pipeline = Self::new();
        pipeline.add_chain(chain)?;
        Ok(pipeline)
    }

    /// Register a module under a key that must not be taken yet.
    pub fn add(&mut self, key: impl Into<String>, module: Arc<dyn Module>) -> Result<(), PipelineError> {
        let key = key.into();
        let module_name = module.name();
        self.modules.insert(key.clone(), module)?;

        ModuleAdded {
            module_key: &key,
            module_name,
        }
        .log();
        Ok(())
    }

    /// Register several modules, stopping at the first duplicate key.
    pub fn add_modules<I, K>(&mut self, modules: I) -> Result<(), PipelineError>
    where
        I: IntoIterator<Item = (K, Arc<dyn Module>)>,
        K: Into<String>,
    {
        for (key, module) in modules {
            self.add(key, module)?;
        }
        Ok(())
    }

    /// Add a link between two registered modules.
    ///
    /// Both ends must already be registered, and a named destination slot must be
    /// one the destination declares. A link that would make the graph cyclic is
    /// rejected and leaves the pipeline unchanged.
    pub fn add_link(&mut self, link: Link) -> Result<(), PipelineError> {
        for key in [&link.src, &link.dest] {
            if !self.modules.contains_key(key) {
                return Err(PipelineError::UnknownModule(key.clone()));
            }
        }

        // A destination declaring nothing (a mis-shaped nested pipeline) fails at run time instead
        if let (Some(slot), Some(dest)) = (&link.dest_slot, self.modules.get(&link.dest)) {
            let dest_keys = dest.input_keys();
            if !dest_keys.is_empty() && !dest_keys.contains(slot) {
                return Err(PipelineError::UndeclaredInputSlot {
                    module_key: link.dest.clone(),
                    slot: slot.clone(),
                });
            }
        }

        // src -> dest closes a cycle exactly when dest already reaches src
        if let Some(path) = find_path(&link.dest, &link.src, &self.links) {
            let mut cycle = Vec::with_capacity(path.len() + 1);
            cycle.push(link.src.clone());
            cycle.extend(path);

            CyclicLinkRejected { cycle: &cycle }.log();
            return Err(PipelineError::CycleDetected { cycle });
        }

        LinkAdded {
            src: &link.src,
            dest: &link.dest,
            src_slot: link.src_slot.as_deref(),
            dest_slot: link.dest_slot.as_deref(),
        }
        .log();
        self.links.add(link);
        Ok(())
    }

    /// Add a purely sequential chain of modules under generated keys.
    ///
    /// Each consecutive pair is joined by a default link. Returns the generated keys
    /// in chain order.
    pub fn add_chain<I>(&mut self, chain: I) -> Result<Vec<String>, PipelineError>
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        let mut keys = Vec::new();
        for module in chain {
            let key = Uuid::new_v4().to_string();
            self.add(key.clone(), module)?;
            keys.push(key);
        }

        for pair in keys.windows(2) {
            self.add_link(Link::new(pair[0].clone(), pair[1].clone()))?;
        }

        Ok(keys)
    }

    pub fn modules(&self) -> &ModuleMap {
        &self.modules
    }

    pub fn links(&self) -> &LinkMap {
        &self.links
    }

    /// Modules with no incoming link, in registration order.
    pub fn root_keys(&self) -> Vec<String> {
        topology::root_keys(&self.modules, &self.links)
    }

    /// Modules with no outgoing link, in registration order.
    pub fn leaf_keys(&self) -> Vec<String> {
        topology::leaf_keys(&self.modules, &self.links)
    }

    /// Whether module `ancestor` transitively feeds module `descendant`.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool, PipelineError> {
        topology::is_ancestor(ancestor, descendant, &self.links)
    }

    /// The single root's input slots.
    pub fn try_input_keys(&self) -> Result<InputKeys, PipelineError> {
        let root = topology::single_root(&self.modules, &self.links)?;
        self.modules
            .get(&root)
            .map(|module| module.input_keys())
            .ok_or(PipelineError::UnknownModule(root))
    }

    /// The single leaf's output slots.
    pub fn try_output_keys(&self) -> Result<OutputKeys, PipelineError> {
        let leaf = topology::single_leaf(&self.modules, &self.links)?;
        self.modules
            .get(&leaf)
            .map(|module| module.output_keys())
            .ok_or(PipelineError::UnknownModule(leaf))
    }

    /// Run from the single root and return the single leaf's result.
    ///
    /// A leaf that produced exactly one output is unwrapped to that bare value;
    /// otherwise the outputs come back as a JSON object keyed by slot.
    pub async fn run(&self, inputs: ModuleInputs) -> Result<Value, PipelineError> {
        self.run_outputs(inputs).await.map(unwrap_single_output)
    }

    /// Run from the single root and return the leaf's outputs untouched.
    pub async fn run_outputs(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, PipelineError> {
        Scheduler::new(&self.modules, &self.links)
            .execute(inputs)
            .await
    }

    /// Run a pipeline with several roots, each with its own inputs.
    ///
    /// Multi-root execution is not implemented; this always fails.
    pub async fn run_multi(
        &self,
        _inputs: HashMap<String, ModuleInputs>,
    ) -> Result<HashMap<String, Value>, PipelineError> {
        Err(PipelineError::NotSupported("run_multi"))
    }
}

#[async_trait]
impl Module for Pipeline {
    fn input_keys(&self) -> InputKeys {
        self.try_input_keys().unwrap_or_else(|error| {
            NestedPipelineShapeInvalid {
                side: "input",
                error: &error,
            }
            .log();
            InputKeys::default()
        })
    }

    fn output_keys(&self) -> OutputKeys {
        self.try_output_keys().unwrap_or_else(|error| {
            NestedPipelineShapeInvalid {
                side: "output",
                error: &error,
            }
            .log();
            OutputKeys::default()
        })
    }

    /// Nested runs return the leaf's raw outputs so downstream links can still
    /// pick slots out of them.
    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        self.run_outputs(inputs)
            .await
            .map_err(|error| ModuleError::Pipeline(Box::new(error)))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
