//! attrkit Compare
//!
//! Synthesize equality and ordering operators from user predicates.
//!
//! # Module Structure
//!
//! - `factory` - `cmp_using` builder and the `ComparatorClass` it produces
//! - `comparable` - `Comparable` wrapper, soft outcomes and strict fallback

mod comparable;
mod factory;

pub use comparable::{compare, CmpOp, Comparable, Outcome};
pub use factory::{cmp_using, CmpUsing, ComparatorClass, Predicate};
