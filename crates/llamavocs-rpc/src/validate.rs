//! Field-level input validation.
//!
//! [`InputReader`] walks a JSON object one field at a time, collecting an
//! [`Issue`] for every violated constraint instead of stopping at the first.
//! Keys that no field asks for are ignored.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Name of the offending field, or empty for the input as a whole.
    pub path: String,
    /// What the constraint expected.
    pub message: String,
}

impl Issue {
    /// Create an issue for a field.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Input rejected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// Every issue found, in field order.
    pub issues: Vec<Issue>,
}

impl ValidationError {
    /// A validation error with a single issue.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid input")?;
        for (i, issue) in self.issues.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{issue}")?;
        }
        Ok(())
    }
}

/// Reads typed fields out of a JSON object input.
///
/// A missing input (`null`) reads as an empty object.
#[derive(Debug)]
pub struct InputReader {
    fields: Map<String, Value>,
    issues: Vec<Issue>,
}

impl InputReader {
    /// Start reading an input value.
    pub fn new(input: Value) -> Result<Self, ValidationError> {
        let fields = match input {
            Value::Null => Map::new(),
            Value::Object(fields) => fields,
            other => {
                return Err(ValidationError::single(
                    "",
                    format!("Expected object, received {}", type_name(&other)),
                ));
            }
        };

        Ok(Self {
            fields,
            issues: Vec::new(),
        })
    }

    /// An optional string of at least `min_len` characters.
    pub fn optional_text(&mut self, field: &str, min_len: usize) -> Option<String> {
        match self.fields.remove(field)? {
            Value::String(text) => {
                if text.chars().count() < min_len {
                    self.push(
                        field,
                        format!("String must contain at least {min_len} character(s)"),
                    );
                }
                Some(text)
            }
            other => {
                self.invalid_type(field, "string", &other);
                None
            }
        }
    }

    /// A required string of at least `min_len` characters.
    ///
    /// Returns an empty string when the field is missing or invalid; the
    /// issue is reported by [`finish`](Self::finish).
    pub fn required_text(&mut self, field: &str, min_len: usize) -> String {
        if !self.fields.contains_key(field) {
            self.push(field, "Required");
            return String::new();
        }
        self.optional_text(field, min_len).unwrap_or_default()
    }

    /// An optional integer within `range`, or `default` when absent.
    pub fn integer(&mut self, field: &str, range: RangeInclusive<i64>, default: i64) -> i64 {
        let Some(value) = self.fields.remove(field) else {
            return default;
        };

        let Value::Number(number) = value else {
            self.invalid_type(field, "number", &value);
            return default;
        };

        if number.is_f64() {
            self.push(field, "Expected integer, received float");
            return default;
        }

        match number.as_i64() {
            Some(n) if n < *range.start() => {
                self.push(
                    field,
                    format!("Number must be greater than or equal to {}", range.start()),
                );
                default
            }
            Some(n) if n <= *range.end() => n,
            _ => {
                self.push(
                    field,
                    format!("Number must be less than or equal to {}", range.end()),
                );
                default
            }
        }
    }

    /// Finish reading, failing if any issue was recorded.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }

    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(Issue::new(field, message));
    }

    fn invalid_type(&mut self, field: &str, expected: &str, received: &Value) {
        self.push(
            field,
            format!("Expected {expected}, received {}", type_name(received)),
        );
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
