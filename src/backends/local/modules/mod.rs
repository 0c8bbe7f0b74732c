// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod prefix_suffix_adder;
pub mod reverse_text;
pub mod template;
pub mod token_counter;

pub use change_text_case::*;
pub use prefix_suffix_adder::*;
pub use reverse_text::*;
pub use template::*;
pub use token_counter::*;

use crate::errors::ModuleError;
use crate::traits::ModuleInputs;

/// Input slot read by the single-input text modules.
pub const INPUT_SLOT: &str = "input";

/// Output slot written by the single-output text modules.
pub const OUTPUT_SLOT: &str = "output";

/// Borrow a string value out of an input slot.
pub(crate) fn text_input<'a>(inputs: &'a ModuleInputs, slot: &str) -> Result<&'a str, ModuleError> {
    match inputs.get(slot) {
        Some(value) => value.as_str().ok_or_else(|| ModuleError::InvalidInput {
            slot: slot.to_string(),
            reason: format!("expected a string, got {}", value),
        }),
        None => Err(ModuleError::MissingInputs {
            slots: vec![slot.to_string()],
        }),
    }
}
