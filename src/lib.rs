// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in module kinds
pub mod config;     // registries + pipeline descriptions
pub mod engine;     // graph store + scheduler
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // module capability
