//! attrkit Project
//!
//! Turn record instances into plain containers.
//!
//! # Module Structure
//!
//! - `filters` - `include` / `exclude` field filters
//! - `projector` - `AsDict` / `AsTuple` and the `asdict` / `astuple` shorthands
//! - `json` - rendering projected values as JSON

mod filters;
mod json;
mod projector;

pub use filters::{exclude, include, FieldFilter, Selector};
pub use json::to_json;
pub use projector::{asdict, astuple, AsDict, AsTuple, DictFactory, TupleFactory, ValueSerializer};
