//! Scenario tests for attrkit.
//!
//! Shared fixtures and result expectations for the integration tests under
//! `tests/`.

pub mod error;
pub mod expect;
pub mod fixtures;

pub mod prelude {
    pub use crate::error::{CheckError, CheckResult};
    pub use crate::expect::Expect;
    pub use crate::fixtures::Fixture;

    pub use attrkit_compare::{cmp_using, compare, CmpOp, Outcome};
    pub use attrkit_converters::{default_if_none, optional, to_bool, to_bool_converter};
    pub use attrkit_core::{list, AttrError, AttrResult, Record, TypeHint, Value, ValueKind};
    pub use attrkit_evolve::{assoc, evolve};
    pub use attrkit_project::{asdict, astuple, exclude, include, AsDict, AsTuple, Selector};
    pub use attrkit_registry::{
        record_partial_cmp, records_equal, FieldRegistry, FieldSpec, InitArgs, Registry,
        RegistryBuilder,
    };
    pub use attrkit_setters::{convert, frozen, pipe, set_attr, validate, NO_OP};
}
