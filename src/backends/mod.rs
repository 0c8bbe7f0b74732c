// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in module implementations.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process text modules, selectable by name from a pipeline description:
//! - **Text Transformation**: case conversion, reversal, prefix/suffix addition
//! - **Text Analysis**: character, word and line counts on separate output slots
//! - **Templating**: fan-in of several named slots into one string
//!
//! ## Function Backend
//! [`function::FnModule`] wraps a closure with declared input and output slots.
//! Use it to wire application code into a pipeline without writing a type.
//!
//! ## Stub Backend (Test-Only)
//! Testing utilities for scheduler and topology tests (only available in test builds):
//! - **StubModule**: configurable slots, forwards its inputs
//! - **FailingModule**: always returns a module error
//! - **RecordingModule**: records execution order into a shared log
//!
//! Nested pipelines need no backend of their own: `Pipeline` implements
//! [`Module`](crate::traits::Module) directly.
//!
//! # Examples
//!
//! ```rust
//! use dagwood_pipeline::backends::local::LocalModuleFactory;
//! use dagwood_pipeline::config::{BackendType, ModuleConfig};
//! use dagwood_pipeline::traits::Module;
//! use std::collections::HashMap;
//!
//! let config = ModuleConfig {
//!     id: Some("uppercase".to_string()),
//!     backend: BackendType::Local,
//!     processor: Some("change_text_case_upper".to_string()),
//!     pipeline: None,
//!     options: HashMap::new(),
//! };
//!
//! let module = LocalModuleFactory::create_module(&config)?;
//! assert_eq!(module.name(), "change_text_case");
//! # Ok::<(), dagwood_pipeline::errors::ConfigError>(())
//! ```

pub mod function;
pub mod local;
#[cfg(test)]
pub mod stub;
