// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::PipelineError;
use crate::traits::Module;
use std::collections::HashMap;
use std::sync::Arc;

/// A type-safe registry mapping module keys to their implementations.
///
/// The `ModuleMap` is the module half of a pipeline's graph store. It maps unique
/// keys to implementations wrapped in `Arc<dyn Module>` so a pipeline can be shared
/// read-only across concurrent runs while each run hands out cheap clones of the
/// same module instances.
///
/// Registration order is remembered. Root and leaf discovery report keys in that
/// order, which keeps error messages and iteration deterministic.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use dagwood_pipeline::backends::local::ReverseTextModule;
/// use dagwood_pipeline::config::ModuleMap;
/// use dagwood_pipeline::traits::Module;
///
/// let mut modules = ModuleMap::new();
/// let reverse: Arc<dyn Module> = Arc::new(ReverseTextModule::new());
/// modules.insert("reverse".to_string(), reverse.clone()).unwrap();
///
/// assert!(modules.contains_key("reverse"));
/// assert!(modules.insert("reverse".to_string(), reverse).is_err());
/// ```
#[derive(Clone, Default)]
pub struct ModuleMap {
    modules: HashMap<String, Arc<dyn Module>>,
    order: Vec<String>,
}

impl ModuleMap {
    /// Create a new empty module map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module under a key that must not be taken yet
    pub fn insert(&mut self, key: String, module: Arc<dyn Module>) -> Result<(), PipelineError> {
        if self.modules.contains_key(&key) {
            return Err(PipelineError::DuplicateKey(key));
        }
        self.order.push(key.clone());
        self.modules.insert(key, module);
        Ok(())
    }

    /// Get a module by key
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Module>> {
        self.modules.get(key)
    }

    /// Check if a module exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.modules.contains_key(key)
    }

    /// All module keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Key/module pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn Module>)> {
        self.order
            .iter()
            .filter_map(|key| self.modules.get(key).map(|module| (key, module)))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for ModuleMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleMap")
            .field("module_count", &self.modules.len())
            .field("module_keys", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::StubModule;

    #[test]
    fn test_insert_preserves_registration_order() {
        let mut modules = ModuleMap::new();
        for key in ["zeta", "alpha", "mid"] {
            modules
                .insert(key.to_string(), Arc::new(StubModule::new()))
                .unwrap();
        }

        let keys: Vec<&str> = modules.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(modules.iter().count(), 3);
        assert_eq!(modules.len(), 3);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut modules = ModuleMap::new();
        modules
            .insert("a".to_string(), Arc::new(StubModule::new()))
            .unwrap();

        let result = modules.insert("a".to_string(), Arc::new(StubModule::new()));

        assert!(matches!(result, Err(PipelineError::DuplicateKey(key)) if key == "a"));
        assert_eq!(modules.len(), 1);
        assert_eq!(modules.keys().count(), 1);
    }
}
