// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod accumulator;
pub mod pipeline;
pub mod scheduler;
pub mod topology;

pub use accumulator::{InputAccumulator, Readiness};
pub use pipeline::Pipeline;
pub use scheduler::Scheduler;
pub use topology::Reachability;
