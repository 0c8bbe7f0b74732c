// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::config::{Link, ModuleMap};
use crate::errors::PipelineError;
use crate::traits::{InputKeys, ModuleInputs, ModuleOutputs};

/// What recording one link did to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Still waiting on at least one slot.
    Pending,
    /// This record filled the last slot.
    BecameReady,
    /// Every slot was already filled before this record; the value was overwritten.
    AlreadyReady,
}

/// Per-run inputs gathered so far for every module, keyed by module key.
///
/// Upstream outputs arrive one link at a time. A module is ready once the number
/// of distinct slots filled equals the number of slots it declares, optional
/// slots included.
#[derive(Debug, Default)]
pub struct InputAccumulator {
    inputs: HashMap<String, ModuleInputs>,
}

impl InputAccumulator {
    /// An empty input map for every registered module
    pub fn new(modules: &ModuleMap) -> Self {
        Self {
            inputs: modules
                .keys()
                .map(|key| (key.clone(), ModuleInputs::new()))
                .collect(),
        }
    }

    /// Replace a module's inputs wholesale. Used for the root's run arguments.
    pub fn seed(&mut self, module_key: &str, inputs: ModuleInputs) {
        self.inputs.insert(module_key.to_string(), inputs);
    }

    /// Route one of `src_outputs` into the link's destination.
    pub fn record(
        &mut self,
        link: &Link,
        src_outputs: &ModuleOutputs,
        dest_keys: &InputKeys,
    ) -> Result<Readiness, PipelineError> {
        let value = link.resolve_output(src_outputs)?;
        let slot = link.resolve_dest_slot(dest_keys)?;

        let dest_inputs = self
            .inputs
            .get_mut(&link.dest)
            .ok_or_else(|| PipelineError::UnknownModule(link.dest.clone()))?;

        let was_ready = dest_inputs.len() == dest_keys.len();
        dest_inputs.insert(slot, value);
        let is_ready = dest_inputs.len() == dest_keys.len();

        Ok(match (was_ready, is_ready) {
            (false, true) => Readiness::BecameReady,
            (true, true) => Readiness::AlreadyReady,
            _ => Readiness::Pending,
        })
    }

    /// Inputs gathered so far for a module
    pub fn inputs_for(&self, module_key: &str) -> Option<&ModuleInputs> {
        self.inputs.get(module_key)
    }
}
