//! attrkit Core Types
//!
//! This crate provides the foundational types shared by every attrkit component:
//! - Identity types (TypeId, FieldId)
//! - The dynamic `Value` model and declared field categories (`TypeHint`)
//! - Record instances
//! - Converters, factories and field defaults
//! - The common `AttrError` taxonomy

mod converter;
mod default;
mod error;
mod id;
mod record;
mod value;

pub use converter::*;
pub use default::*;
pub use error::*;
pub use id::*;
pub use record::*;
pub use value::*;
