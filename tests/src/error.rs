//! Errors reported by failed expectations.

use thiserror::Error;

pub type CheckResult<T> = Result<T, CheckError>;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("check '{check}' failed: {message}")]
    Failed { check: String, message: String },

    #[error("check '{check}' has an invalid error pattern: {message}")]
    BadPattern { check: String, message: String },
}

impl CheckError {
    pub fn failed(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            check: check.into(),
            message: message.into(),
        }
    }

    pub fn bad_pattern(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadPattern {
            check: check.into(),
            message: message.into(),
        }
    }
}
