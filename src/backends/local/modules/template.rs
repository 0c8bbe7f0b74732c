// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A module that renders named input slots into a text template.
//!
//! Placeholders are written `{slot}`. A placeholder written `{slot?}` declares an
//! optional slot that renders as the empty string when no value arrives. A `{`
//! without a closing `}` is kept as literal text.

use async_trait::async_trait;
use serde_json::Value;

use super::OUTPUT_SLOT;
use crate::errors::ModuleError;
use crate::traits::{InputKeys, Module, ModuleInputs, ModuleOutputs, OutputKeys};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot { name: String, optional: bool },
}

/// Template module - fills `{slot}` placeholders from input slots
#[derive(Debug, Clone)]
pub struct TemplateModule {
    segments: Vec<Segment>,
    input_keys: InputKeys,
}

impl TemplateModule {
    pub fn new(template: impl AsRef<str>) -> Self {
        let segments = parse(template.as_ref());

        let mut input_keys = InputKeys::default();
        for segment in &segments {
            if let Segment::Slot { name, optional } = segment {
                if *optional {
                    input_keys.optional.insert(name.clone());
                } else {
                    input_keys.required.insert(name.clone());
                }
            }
        }
        // A slot used both ways is required
        let required = input_keys.required.clone();
        input_keys.optional.retain(|slot| !required.contains(slot));

        Self {
            segments,
            input_keys,
        }
    }
}

fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            break;
        };

        literal.push_str(&rest[..open]);
        let inner = &after_open[..close];
        let (name, optional) = match inner.strip_suffix('?') {
            Some(name) => (name, true),
            None => (inner, false),
        };

        if name.is_empty() {
            literal.push_str(&rest[open..open + close + 2]);
        } else {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Slot {
                name: name.to_string(),
                optional,
            });
        }
        rest = &after_open[close + 1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl Module for TemplateModule {
    fn input_keys(&self) -> InputKeys {
        self.input_keys.clone()
    }

    fn output_keys(&self) -> OutputKeys {
        OutputKeys::from_slots([OUTPUT_SLOT])
    }

    async fn run_component(&self, inputs: ModuleInputs) -> Result<ModuleOutputs, ModuleError> {
        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Slot { name, optional } => match inputs.get(name) {
                    Some(value) => rendered.push_str(&render_value(value)),
                    None if *optional => {}
                    None => {
                        return Err(ModuleError::MissingInputs {
                            slots: vec![name.clone()],
                        })
                    }
                },
            }
        }

        Ok(ModuleOutputs::from([(
            OUTPUT_SLOT.to_string(),
            Value::String(rendered),
        )]))
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slots_declared_from_placeholders() {
        let module = TemplateModule::new("{question} ({context?}) {question}");
        let keys = module.input_keys();

        assert_eq!(keys.required.iter().collect::<Vec<_>>(), vec!["question"]);
        assert_eq!(keys.optional.iter().collect::<Vec<_>>(), vec!["context"]);
    }

    #[test]
    fn test_parse_keeps_unmatched_braces_literal() {
        assert_eq!(
            parse("a {b} {} c {d"),
            vec![
                Segment::Literal("a ".to_string()),
                Segment::Slot {
                    name: "b".to_string(),
                    optional: false
                },
                Segment::Literal(" {} c {d".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_render() {
        let test_cases = vec![
            ("{a} + {b}", json!({"a": "x", "b": "y"}), "x + y"),
            ("count: {n}", json!({"n": 3}), "count: 3"),
            ("{a}{hint?}", json!({"a": "only"}), "only"),
            ("{a}{hint?}", json!({"a": "with ", "hint": "hint"}), "with hint"),
            ("no slots", json!({}), "no slots"),
        ];

        for (template, inputs, expected) in test_cases {
            let module = TemplateModule::new(template);
            let inputs: ModuleInputs = serde_json::from_value(inputs).unwrap();

            let outputs = module.run_component(inputs).await.unwrap();

            assert_eq!(outputs[OUTPUT_SLOT], json!(expected), "template: {}", template);
        }
    }

    #[tokio::test]
    async fn test_missing_required_slot() {
        let module = TemplateModule::new("{a} and {b}");
        let inputs = ModuleInputs::from([("a".to_string(), json!("x"))]);

        let result = module.run_component(inputs).await;

        assert!(matches!(result, Err(ModuleError::MissingInputs { slots }) if slots == vec!["b"]));
    }
}
