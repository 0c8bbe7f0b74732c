// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::{PipelineError, SlotSide};
use crate::traits::{InputKeys, ModuleOutputs};

/// A directed edge sending one of `src`'s outputs to one of `dest`'s inputs.
///
/// Either slot may be left out:
/// - without `src_slot` the source must produce exactly one output, which is forwarded
/// - without `dest_slot` the destination must declare exactly one input slot, which receives it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub src: String,
    pub dest: String,
    #[serde(default)]
    pub src_slot: Option<String>,
    #[serde(default)]
    pub dest_slot: Option<String>,
}

impl Link {
    /// A link that relies on default slot resolution at both ends
    pub fn new(src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            src_slot: None,
            dest_slot: None,
        }
    }

    pub fn with_src_slot(mut self, slot: impl Into<String>) -> Self {
        self.src_slot = Some(slot.into());
        self
    }

    pub fn with_dest_slot(mut self, slot: impl Into<String>) -> Self {
        self.dest_slot = Some(slot.into());
        self
    }

    /// Pick the value this link forwards out of the source module's outputs.
    pub fn resolve_output(&self, outputs: &ModuleOutputs) -> Result<Value, PipelineError> {
        match &self.src_slot {
            Some(slot) => outputs
                .get(slot)
                .cloned()
                .ok_or_else(|| PipelineError::MissingOutputSlot {
                    module_key: self.src.clone(),
                    slot: slot.clone(),
                }),
            None => {
                if outputs.len() != 1 {
                    return Err(self.ambiguous(SlotSide::Source, outputs.len()));
                }
                // len == 1 checked above
                Ok(outputs.values().next().cloned().unwrap_or(Value::Null))
            }
        }
    }

    /// Name the destination input slot this link fills.
    pub fn resolve_dest_slot(&self, dest_keys: &InputKeys) -> Result<String, PipelineError> {
        match &self.dest_slot {
            Some(slot) => Ok(slot.clone()),
            None => dest_keys
                .single()
                .cloned()
                .ok_or_else(|| self.ambiguous(SlotSide::Destination, dest_keys.len())),
        }
    }

    fn ambiguous(&self, side: SlotSide, count: usize) -> PipelineError {
        PipelineError::AmbiguousSlot {
            src: self.src.clone(),
            dest: self.dest.clone(),
            side,
            count,
        }
    }
}

/// Edge index: source key to its outgoing links, in insertion order.
///
/// A key with no entry is a leaf. Insertion order is what the scheduler falls back
/// on when two modules have no ancestry relation, so it is never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct LinkMap(pub HashMap<String, Vec<Link>>);

impl LinkMap {
    /// Create a new empty link map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Append a link to its source's outgoing list
    pub fn add(&mut self, link: Link) {
        self.0.entry(link.src.clone()).or_default().push(link);
    }

    /// Outgoing links of a module, empty when it has none
    pub fn get_links(&self, src: &str) -> &[Link] {
        self.0.get(src).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a module has any outgoing link
    pub fn has_outgoing(&self, src: &str) -> bool {
        !self.get_links(src).is_empty()
    }

    /// Every link in the graph
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.0.values().flatten()
    }

    /// Keys of the modules that link directly from `src`
    pub fn children<'a>(&'a self, src: &str) -> impl Iterator<Item = &'a String> + 'a {
        self.get_links(src).iter().map(|link| &link.dest)
    }
}
