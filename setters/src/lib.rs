//! attrkit Setters
//!
//! Hooks run when a field is written after construction.
//!
//! Responsibilities:
//! - Provide the stage catalog (`frozen`, `validate`, `convert`, `pipe`)
//! - Run a hook against an instance and field
//! - Resolve and run a field's pipeline on attribute writes
//!
//! # Module Structure
//!
//! - `stages` - The stage catalog and `apply`
//! - `executor` - `set_attr`, the attribute-write entry point

mod executor;
mod stages;

pub use executor::set_attr;
pub use stages::{apply, convert, frozen, pipe, validate, NO_OP};
