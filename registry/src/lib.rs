//! attrkit Registry
//!
//! The Field Registry: runtime lookup of record types and their ordered field
//! specs. Single source of truth for defaults, validators, converters, aliases
//! and participation flags. The registry is immutable after construction via
//! RegistryBuilder.
//!
//! # Module Structure
//!
//! - `types` - `FieldSpec` and `RecordType`
//! - `builder` - `RegistryBuilder` / `TypeBuilder`
//! - `registry` - the immutable `Registry` and the `FieldRegistry` seam
//! - `construct` - the generated initializer
//! - `validators` - validator type and catalog
//! - `hooks` - on-setattr hook data
//! - `ordering` - generated record equality and ordering

mod builder;
mod construct;
mod hooks;
mod ordering;
mod registry;
mod types;
pub mod validators;

pub use builder::{RegistryBuilder, RegistryError, TypeBuilder};
pub use construct::InitArgs;
pub use hooks::{HookFn, OnSetAttr, SetHook};
pub use ordering::{record_partial_cmp, records_equal};
pub use registry::{FieldRegistry, Registry};
pub use types::*;
pub use validators::{ValidateFn, Validator};
