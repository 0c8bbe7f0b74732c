pub mod module;

pub use module::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};
pub use crate::config::{Link, LinkMap, ModuleMap};
