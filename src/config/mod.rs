// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod link_map;
mod loader;
mod module_map;
mod runtime;

pub use link_map::{Link, LinkMap};
pub use loader::{load_config, BackendType, ModuleConfig, PipelineConfig};
pub use module_map::ModuleMap;
pub use runtime::PipelineBuilder;
