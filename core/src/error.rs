//! Common error types for attrkit.

use crate::Value;
use thiserror::Error;

/// Result type for attrkit operations.
pub type AttrResult<T> = Result<T, AttrError>;

/// Errors raised by converters, validators, setter hooks, projection and evolution.
#[derive(Debug, Clone, Error)]
pub enum AttrError {
    /// The operand lacks field metadata.
    #[error("{type_name} is not a record type")]
    NotARecordType { type_name: String },

    /// A name was not found among a type's fields.
    #[error("{type_name} has no field named '{field}'")]
    UnknownField { type_name: String, field: String },

    /// Mutation attempted on a frozen field or record.
    #[error("can't set attribute '{field}': frozen")]
    FrozenAttribute { field: String },

    /// A validator rejected a value.
    #[error("invalid value {value} for field '{field}': {message}")]
    Validation {
        field: String,
        value: String,
        message: String,
    },

    /// A converter rejected a value.
    #[error("cannot convert {value}{}: {message}", field_suffix(.field))]
    Conversion {
        value: String,
        message: String,
        /// The field being assigned, when the converter ran for one.
        field: Option<String>,
    },

    /// Mutually exclusive or jointly-required parameters were misused.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// A value did not belong to a recognized textual format.
    #[error("cannot convert {value} to {target}{}", field_suffix(.field))]
    ValueFormat {
        value: String,
        target: String,
        field: Option<String>,
    },

    /// A strict comparison found no operator willing to compare the operands.
    #[error("'{op}' not supported between instances of '{left}' and '{right}'")]
    IncomparableOperands {
        op: String,
        left: String,
        right: String,
    },

    /// Bad arguments to an initializer or to evolve.
    #[error("{message}")]
    Argument { message: String },
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" for field '{}'", name),
        None => String::new(),
    }
}

impl AttrError {
    pub fn not_a_record_type(type_name: impl Into<String>) -> Self {
        Self::NotARecordType {
            type_name: type_name.into(),
        }
    }

    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn frozen_attribute(field: impl Into<String>) -> Self {
        Self::FrozenAttribute {
            field: field.into(),
        }
    }

    pub fn validation(field: impl Into<String>, value: &Value, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub fn conversion(value: &Value, message: impl Into<String>) -> Self {
        Self::Conversion {
            value: value.to_string(),
            message: message.into(),
            field: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn value_format(value: &Value, target: impl Into<String>) -> Self {
        Self::ValueFormat {
            value: value.to_string(),
            target: target.into(),
            field: None,
        }
    }

    pub fn incomparable(
        op: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::IncomparableOperands {
            op: op.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn argument(message: impl Into<String>) -> Self {
        Self::Argument {
            message: message.into(),
        }
    }

    /// Attach the field a converter ran for.
    ///
    /// Only conversion failures carry a field; other errors and errors that
    /// already name one are returned unchanged.
    pub fn for_field(self, name: impl Into<String>) -> Self {
        match self {
            Self::Conversion {
                value,
                message,
                field: None,
            } => Self::Conversion {
                value,
                message,
                field: Some(name.into()),
            },
            Self::ValueFormat {
                value,
                target,
                field: None,
            } => Self::ValueFormat {
                value,
                target,
                field: Some(name.into()),
            },
            other => other,
        }
    }

    /// Returns true for validator rejections.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
