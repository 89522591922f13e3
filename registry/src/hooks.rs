//! On-setattr hook data.
//!
//! Hooks are declared here so that field specs can carry them; running them
//! is the job of `attrkit-setters`.

use crate::FieldSpec;
use attrkit_core::{AttrResult, Record, Value};
use std::fmt;
use std::sync::Arc;

/// Signature of a custom hook: `(instance, field, new value) -> stored value`.
pub type HookFn = dyn Fn(&Record, &FieldSpec, Value) -> AttrResult<Value> + Send + Sync;

/// One stage (or an ordered group of stages) run on an attribute write.
#[derive(Clone)]
pub enum SetHook {
    /// Reject every write.
    Frozen,
    /// Run the field's validator, pass the value through.
    Validate,
    /// Run the field's converter.
    Convert,
    /// Thread the value through each hook in order.
    Pipe(Vec<SetHook>),
    /// A caller-supplied hook.
    Custom { name: String, func: Arc<HookFn> },
}

impl SetHook {
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Record, &FieldSpec, Value) -> AttrResult<Value> + Send + Sync + 'static,
    {
        SetHook::Custom {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for SetHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetHook::Frozen => write!(f, "frozen"),
            SetHook::Validate => write!(f, "validate"),
            SetHook::Convert => write!(f, "convert"),
            SetHook::Pipe(hooks) => f.debug_tuple("pipe").field(hooks).finish(),
            SetHook::Custom { name, .. } => write!(f, "{}", name),
        }
    }
}

/// What happens when a field is written after construction.
#[derive(Debug, Clone)]
pub enum OnSetAttr {
    /// Store the value unchanged, skipping all hooks.
    NoOp,
    /// Run the hook and store its result.
    Hooks(SetHook),
}

impl OnSetAttr {
    /// Default for mutable types: convert, then validate.
    pub fn convert_then_validate() -> Self {
        OnSetAttr::Hooks(SetHook::Pipe(vec![SetHook::Convert, SetHook::Validate]))
    }

    /// Returns true if this pipeline rejects every write.
    pub fn is_frozen(&self) -> bool {
        matches!(self, OnSetAttr::Hooks(SetHook::Frozen))
    }
}

impl From<SetHook> for OnSetAttr {
    fn from(hook: SetHook) -> Self {
        OnSetAttr::Hooks(hook)
    }
}
