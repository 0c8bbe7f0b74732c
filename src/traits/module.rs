// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

use crate::errors::ModuleError;

/// Named input values handed to a module, keyed by input slot.
pub type ModuleInputs = HashMap<String, Value>;

/// Named output values produced by a module, keyed by output slot.
pub type ModuleOutputs = HashMap<String, Value>;

/// The input slots a module declares.
///
/// Required and optional slots are kept apart so a module can reject a call that
/// is missing a required argument. The scheduler's readiness gate does not care
/// about the distinction: a module is ready once every declared slot is filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputKeys {
    pub required: BTreeSet<String>,
    pub optional: BTreeSet<String>,
}

impl InputKeys {
    /// Input keys made only of required slots.
    pub fn from_required<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: slots.into_iter().map(Into::into).collect(),
            optional: BTreeSet::new(),
        }
    }

    /// Add optional slots to an existing key set.
    ///
    /// A slot that is already required stays required.
    pub fn with_optional<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for slot in slots.into_iter().map(Into::into) {
            if !self.required.contains(&slot) {
                self.optional.insert(slot);
            }
        }
        self
    }

    /// Every distinct declared slot, required first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.required.iter().chain(
            self.optional
                .iter()
                .filter(move |slot| !self.required.contains(slot.as_str())),
        )
    }

    /// Number of distinct declared slots, required and optional together.
    pub fn len(&self) -> usize {
        self.all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.required.contains(slot) || self.optional.contains(slot)
    }

    /// The only declared slot, if there is exactly one.
    pub fn single(&self) -> Option<&String> {
        if self.len() == 1 {
            self.all().next()
        } else {
            None
        }
    }
}

/// The output slots a module declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputKeys(pub BTreeSet<String>);

impl OutputKeys {
    pub fn from_slots<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(slots.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.0.contains(slot)
    }
}

/// A unit of work that can be wired into a pipeline.
///
/// A module declares the slots it reads and writes and turns a complete set of
/// named inputs into a set of named outputs. A `Pipeline` implements this trait
/// too, which is how pipelines nest.
#[async_trait]
pub trait Module: Send + Sync {
    fn input_keys(&self) -> InputKeys;

    fn output_keys(&self) -> OutputKeys;

    /// Check inputs before the module runs.
    ///
    /// The default rejects a call that is missing any required slot.
    fn validate_inputs(&self, inputs: &ModuleInputs) -> Result<(), ModuleError> {
        let missing: Vec<String> = self
            .input_keys()
            .required
            .iter()
            .filter(|slot| !inputs.contains_key(slot.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ModuleError::MissingInputs { slots: missing })
        }
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_keys_count_required_and_optional() {
        let keys = InputKeys::from_required(["query"]).with_optional(["context"]);

        assert_eq!(keys.len(), 2);
        assert!(keys.contains("query"));
        assert!(keys.contains("context"));
        assert!(keys.single().is_none());
        assert_eq!(keys.all().cloned().collect::<Vec<_>>(), vec!["query", "context"]);
    }

    #[test]
    fn test_single_slot() {
        let keys = InputKeys::from_required(["input"]);
        assert_eq!(keys.single().map(String::as_str), Some("input"));

        let optional_only = InputKeys::default().with_optional(["hint"]);
        assert_eq!(optional_only.single().map(String::as_str), Some("hint"));

        assert!(InputKeys::default().single().is_none());
    }

    #[test]
    fn test_slot_declared_both_ways_counts_once() {
        let keys = InputKeys::from_required(["x"]).with_optional(["x", "hint"]);

        assert_eq!(keys.len(), 2);
        assert!(keys.optional.contains("hint"));
        assert!(!keys.optional.contains("x"));

        // Fields are public, so an overlap can still be built by hand
        let overlapping = InputKeys {
            required: BTreeSet::from(["x".to_string()]),
            optional: BTreeSet::from(["x".to_string()]),
        };
        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping.single().map(String::as_str), Some("x"));
    }
}
