//! Single-value converters.
//!
//! A `Converter` is an ordered list of named stages. Composition concatenates
//! stage lists, so it is associative by construction and always runs left to
//! right.

use crate::{AttrResult, TypeHint, Value};
use std::fmt;
use std::sync::Arc;

/// Signature of one conversion stage.
pub type ConvertFn = dyn Fn(Value) -> AttrResult<Value> + Send + Sync;

#[derive(Clone)]
struct Stage {
    name: String,
    func: Arc<ConvertFn>,
}

/// A composable `Value -> Value` normalizer.
#[derive(Clone)]
pub struct Converter {
    stages: Vec<Stage>,
    /// Declared input category, for type-hint consumers.
    input: Option<TypeHint>,
    /// Declared output category, for type-hint consumers.
    output: Option<TypeHint>,
}

impl Converter {
    /// Create a single-stage converter.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> AttrResult<Value> + Send + Sync + 'static,
    {
        Self {
            stages: vec![Stage {
                name: name.into(),
                func: Arc::new(func),
            }],
            input: None,
            output: None,
        }
    }

    /// A converter with no stages; returns its input unchanged.
    pub fn identity() -> Self {
        Self {
            stages: Vec::new(),
            input: None,
            output: None,
        }
    }

    /// Declare the input and output categories.
    pub fn with_types(mut self, input: Option<TypeHint>, output: Option<TypeHint>) -> Self {
        self.input = input;
        self.output = output;
        self
    }

    pub fn input_hint(&self) -> Option<&TypeHint> {
        self.input.as_ref()
    }

    pub fn output_hint(&self) -> Option<&TypeHint> {
        self.output.as_ref()
    }

    /// Names of the stages, in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name.as_str())
    }

    /// Compose `self` followed by `next`.
    ///
    /// The result takes its input hint from `self` and its output hint from `next`.
    pub fn then(&self, next: &Converter) -> Converter {
        let mut stages = self.stages.clone();
        stages.extend(next.stages.iter().cloned());
        Converter {
            stages,
            input: if self.stages.is_empty() {
                next.input.clone()
            } else {
                self.input.clone()
            },
            output: if next.stages.is_empty() {
                self.output.clone()
            } else {
                next.output.clone()
            },
        }
    }

    /// Run every stage in order.
    pub fn convert(&self, value: Value) -> AttrResult<Value> {
        self.stages
            .iter()
            .try_fold(value, |value, stage| (stage.func)(value))
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("stages", &self.stage_names().collect::<Vec<_>>())
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}
