//! Expectations on operation results.

use attrkit_core::{AttrResult, Value};
use std::fmt;

use crate::error::{CheckError, CheckResult};

/// What an operation is expected to produce.
#[derive(Default)]
pub struct Expect {
    pub value: Option<Value>,
    pub error: Option<String>,
    pub error_pattern: Option<String>,
}

impl fmt::Debug for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expect")
            .field("value", &self.value)
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .finish()
    }
}

impl Expect {
    /// Expect success with exactly this value.
    pub fn value(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Expect a failure whose message contains `text`.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            error: Some(text.into()),
            ..Self::default()
        }
    }

    /// Expect a failure whose message matches the regex `pattern`.
    pub fn error_matches(pattern: impl Into<String>) -> Self {
        Self {
            error_pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Check a result against this expectation.
    pub fn check<T>(&self, check: &str, result: &AttrResult<T>) -> CheckResult<()>
    where
        T: Clone + Into<Value>,
    {
        let result = result
            .as_ref()
            .map(|v| v.clone().into())
            .map_err(|e| e.to_string());

        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(CheckError::failed(
                    check,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(v) => Err(CheckError::failed(
                    check,
                    format!("expected error containing '{}', got value {}", expected, v),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern)
                .map_err(|e| CheckError::bad_pattern(check, e.to_string()))?;
            return match result {
                Err(msg) if re.is_match(&msg) => Ok(()),
                Err(msg) => Err(CheckError::failed(
                    check,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(v) => Err(CheckError::failed(
                    check,
                    format!("expected error matching '{}', got value {}", pattern, v),
                )),
            };
        }

        match (result, &self.value) {
            (Err(msg), _) => Err(CheckError::failed(check, format!("unexpected error: {}", msg))),
            (Ok(actual), Some(expected)) if actual != *expected => Err(CheckError::failed(
                check,
                format!("expected {}, got {}", expected, actual),
            )),
            (Ok(_), _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrkit_core::AttrError;

    #[test]
    fn test_value_expectation() {
        let ok: AttrResult<Value> = Ok(Value::Int(1));
        assert!(Expect::value(1).check("one", &ok).is_ok());
        assert!(Expect::value(2).check("two", &ok).is_err());
        assert!(Expect::error("boom").check("err", &ok).is_err());
    }

    #[test]
    fn test_error_expectations() {
        let err: AttrResult<Value> = Err(AttrError::frozen_attribute("x"));
        assert!(Expect::error("frozen").check("contains", &err).is_ok());
        assert!(Expect::error_matches(r"'x'.*frozen$").check("regex", &err).is_ok());
        assert!(Expect::value(1).check("value", &err).is_err());
        assert!(matches!(
            Expect::error_matches("(").check("bad", &err),
            Err(CheckError::BadPattern { .. })
        ));
    }
}
