// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod module;
mod pipeline;

pub use config::ConfigError;
pub use module::ModuleError;
pub use pipeline::{PipelineError, SlotSide};
