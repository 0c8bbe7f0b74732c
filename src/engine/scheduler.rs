// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-root work queue scheduler.
//!
//! # Execution Flow
//!
//! 1. **Init**: resolve the single root, seed its inputs with the run inputs and
//!    queue it
//! 2. **Step**: pop the queue head and run the module with the inputs gathered
//!    for it up to that moment
//! 3. **Fan-out**: a module without outgoing links contributes its outputs to the
//!    result list; otherwise every outgoing link routes a value into the
//!    destination's accumulator, and a destination whose inputs just became
//!    complete joins the queue
//! 4. **Ancestral sort**: re-order the queue so upstream modules run before their
//!    descendants, leaving unrelated modules in arrival order
//! 5. **Termination**: once the queue drains, exactly one result must have been
//!    collected
//!
//! Modules run strictly one at a time. A module whose inputs include optional slots
//! benefits from the ancestral sort: anything upstream of it that is already queued
//! runs first, so those slots are filled before it executes.
//!
//! A module failure aborts the run immediately. Nothing is retried and no partial
//! result is returned.

use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use crate::config::{LinkMap, ModuleMap};
use crate::engine::accumulator::{InputAccumulator, Readiness};
use crate::engine::topology::{single_root, Reachability};
use crate::errors::PipelineError;
use crate::observability::messages::engine::{
    ModuleExecutionCompleted, ModuleExecutionFailed, ModuleExecutionStarted, ModuleQueued,
    RunCompleted, RunFailed, RunStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Module, ModuleInputs, ModuleOutputs};

/// A module whose inputs are complete, waiting for its turn.
///
/// Inputs are read from the accumulator when the module is popped, so a value an
/// ancestor writes while this entry waits is still seen.
struct QueuedModule {
    module_key: String,
    module: Arc<dyn Module>,
}

/// Runs one pipeline graph. Borrowed read-only, so concurrent runs can share the graph.
pub struct Scheduler<'a> {
    modules: &'a ModuleMap,
    links: &'a LinkMap,
}

impl<'a> Scheduler<'a> {
    pub fn new(modules: &'a ModuleMap, links: &'a LinkMap) -> Self {
        Self { modules, links }
    }

    /// Run the graph from its single root and return the single leaf's raw outputs.
    pub async fn execute(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, PipelineError> {
        let result = self.drain(inputs).await;
        if let Err(error) = &result {
            RunFailed { error }.log();
        }
        result
    }

    async fn drain(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, PipelineError> {
        let root_key = single_root(self.modules, self.links)?;
        let root = self.module(&root_key)?;

        let started = RunStarted {
            root_key: &root_key,
            module_count: self.modules.len(),
            link_count: self.links.links().count(),
        };
        started.log();
        let start_time = Instant::now();

        // Fresh per run: nothing below outlives this call
        let reachability = Reachability::build(self.modules, self.links);
        let mut accumulator = InputAccumulator::new(self.modules);
        accumulator.seed(&root_key, inputs);
        let mut queue = VecDeque::from([QueuedModule {
            module_key: root_key,
            module: root,
        }]);
        let mut results: Vec<ModuleOutputs> = Vec::new();
        let mut modules_executed = 0;

        while let Some(QueuedModule { module_key, module }) = queue.pop_front() {
            let inputs = accumulator
                .inputs_for(&module_key)
                .cloned()
                .unwrap_or_default();

            let outputs = execute_module(&module_key, module.as_ref(), inputs).await?;
            modules_executed += 1;

            let links = self.links.get_links(&module_key);
            if links.is_empty() {
                results.push(outputs);
            } else {
                for link in links {
                    let dest = self.module(&link.dest)?;
                    let dest_keys = dest.input_keys();

                    if accumulator.record(link, &outputs, &dest_keys)? == Readiness::BecameReady {
                        queue.push_back(QueuedModule {
                            module_key: link.dest.clone(),
                            module: dest,
                        });
                        ModuleQueued {
                            module_key: &link.dest,
                            queue_len: queue.len(),
                        }
                        .log();
                    }
                }
            }

            queue = reachability.ancestral_sort(queue, |queued| queued.module_key.as_str());
        }

        if results.len() != 1 {
            return Err(PipelineError::MultipleOutputs {
                count: results.len(),
            });
        }

        RunCompleted {
            modules_executed,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(results.remove(0))
    }

    fn module(&self, key: &str) -> Result<Arc<dyn Module>, PipelineError> {
        self.modules
            .get(key)
            .cloned()
            .ok_or_else(|| PipelineError::UnknownModule(key.to_string()))
    }
}

async fn execute_module(
    module_key: &str,
    module: &dyn Module,
    inputs: ModuleInputs,
) -> Result<ModuleOutputs, PipelineError> {
    let started = ModuleExecutionStarted {
        module_key,
        module_name: module.name(),
        input_count: inputs.len(),
    };
    started.log();
    let span = started.span("module_execution");
    let start_time = Instant::now();

    let result = match module.validate_inputs(&inputs) {
        Ok(()) => module.run_component(inputs).instrument(span).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(outputs) => {
            ModuleExecutionCompleted {
                module_key,
                output_count: outputs.len(),
                duration: start_time.elapsed(),
            }
            .log();
            Ok(outputs)
        }
        Err(source) => {
            ModuleExecutionFailed {
                module_key,
                error: &source,
            }
            .log();
            Err(PipelineError::ModuleFailed {
                module_key: module_key.to_string(),
                source,
            })
        }
    }
}

/// Collapse a single-entry output map to its bare value.
///
/// Anything else comes back as a JSON object keyed by output slot.
pub fn unwrap_single_output(mut outputs: ModuleOutputs) -> Value {
    if outputs.len() == 1 {
        if let Some(key) = outputs.keys().next().cloned() {
            return outputs.remove(&key).unwrap_or(Value::Null);
        }
    }
    Value::Object(outputs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_single_output() {
        let single = ModuleOutputs::from([("output".to_string(), json!("done"))]);
        assert_eq!(unwrap_single_output(single), json!("done"));

        let multiple = ModuleOutputs::from([
            ("answer".to_string(), json!("42")),
            ("sources".to_string(), json!(["a", "b"])),
        ]);
        assert_eq!(
            unwrap_single_output(multiple),
            json!({"answer": "42", "sources": ["a", "b"]})
        );

        assert_eq!(unwrap_single_output(ModuleOutputs::new()), json!({}));
    }
}
