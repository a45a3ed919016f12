//! Configuration issues reported by config validation.
//!
//! Validation never fails outright: it returns every detected issue with a
//! severity so the caller can print warnings and stop only on errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A numeric field is outside its accepted range.
    OutOfRange { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn empty_value(field: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            message: format!("{} cannot be empty", field),
        }
    }

    pub fn out_of_range(severity: Severity, field: &str, value: impl ToString, expected: &str) -> Self {
        let value = value.to_string();
        Self {
            severity,
            message: format!("{}: {} is out of range (expected {})", field, value, expected),
            code: ConfigIssueCode::OutOfRange {
                field: field.to_string(),
                value,
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
