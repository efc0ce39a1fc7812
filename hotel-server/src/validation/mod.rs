//! Request payload validation
//!
//! Each payload type is described by a [`Schema`]: a flat list of
//! [`FieldSpec`]s, each naming a JSON field, its expected type, whether it
//! must be present, and the constraints it must satisfy. One evaluator walks
//! every schema the same way and reports every violation it finds as a
//! [`FieldError`], so a single response lists all problems at once.
//!
//! Schemas run against the raw JSON value before it is deserialized, which
//! keeps "missing" and "wrong type" distinguishable and reportable per field.

mod extractor;
pub mod schemas;

pub use extractor::{Validated, ValidatedJson};

use serde_json::{Map, Value};
use shared::error::FieldError;
use validator::{ValidateLength, ValidateRange};

/// Expected JSON type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    fn default_type_message(&self) -> &'static str {
        match self {
            FieldKind::Text => "Expected string",
            FieldKind::Number => "Expected number",
        }
    }
}

/// A constraint and the message reported when it fails
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Minimum length in characters (text only)
    MinLength(u64, &'static str),
    /// Inclusive lower bound (numbers only)
    Min(f64, &'static str),
    /// Inclusive upper bound (numbers only)
    Max(f64, &'static str),
    /// Strictly greater than zero (numbers only)
    Positive(&'static str),
}

impl Rule {
    fn check_text(&self, value: &str) -> Option<&'static str> {
        match *self {
            Rule::MinLength(min, message) => {
                (!value.validate_length(Some(min), None, None)).then_some(message)
            }
            _ => None,
        }
    }

    fn check_number(&self, value: f64) -> Option<&'static str> {
        let ok = match *self {
            Rule::Min(min, _) => value.validate_range(Some(min), None, None, None),
            Rule::Max(max, _) => value.validate_range(None, Some(max), None, None),
            Rule::Positive(_) => value.validate_range(None, None, Some(0.0), None),
            Rule::MinLength(..) => true,
        };
        (!ok).then_some(self.message())
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::MinLength(_, m) | Rule::Min(_, m) | Rule::Max(_, m) | Rule::Positive(m) => m,
        }
    }
}

/// One field of a payload schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Reported when the field is missing (if required) or has the wrong type
    pub type_message: Option<&'static str>,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    fn check(&self, body: &Map<String, Value>, errors: &mut Vec<FieldError>) {
        let value = match body.get(self.name) {
            Some(value) => value,
            None => {
                if self.required {
                    errors.push(FieldError::new(
                        self.name,
                        self.type_message.unwrap_or("Required"),
                    ));
                }
                return;
            }
        };

        let violations: Vec<&'static str> = match (self.kind, value) {
            (FieldKind::Text, Value::String(s)) => {
                self.rules.iter().filter_map(|r| r.check_text(s)).collect()
            }
            (FieldKind::Number, Value::Number(n)) => match n.as_f64() {
                Some(n) => self.rules.iter().filter_map(|r| r.check_number(n)).collect(),
                None => vec![self.type_message()],
            },
            // null counts as present with the wrong type
            _ => vec![self.type_message()],
        };

        errors.extend(
            violations
                .into_iter()
                .map(|message| FieldError::new(self.name, message)),
        );
    }

    fn type_message(&self) -> &'static str {
        self.type_message
            .unwrap_or_else(|| self.kind.default_type_message())
    }
}

/// A declarative payload schema
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Check a JSON body against every field, collecting all violations
    pub fn validate(&self, body: &Value) -> Result<(), Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new("", "Expected object")]);
        };

        let mut errors = Vec::new();
        for field in self.fields {
            field.check(object, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: Schema = Schema {
        fields: &[
            FieldSpec {
                name: "title",
                kind: FieldKind::Text,
                required: true,
                type_message: None,
                rules: &[Rule::MinLength(3, "too short")],
            },
            FieldSpec {
                name: "score",
                kind: FieldKind::Number,
                required: false,
                type_message: Some("score must be a number"),
                rules: &[Rule::Min(0.0, "too low"), Rule::Max(10.0, "too high")],
            },
            FieldSpec {
                name: "price",
                kind: FieldKind::Number,
                required: false,
                type_message: None,
                rules: &[Rule::Positive("must be positive")],
            },
        ],
    };

    fn paths(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_valid_body_passes() {
        assert!(SAMPLE.validate(&json!({"title": "abc", "score": 10})).is_ok());
        assert!(SAMPLE.validate(&json!({"title": "abc", "score": 0.0})).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let errors = SAMPLE.validate(&json!({"score": 5})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("title", "Required")]);
    }

    #[test]
    fn test_optional_field_may_be_absent_but_not_null() {
        assert!(SAMPLE.validate(&json!({"title": "abcd"})).is_ok());

        let errors = SAMPLE
            .validate(&json!({"title": "abcd", "score": null}))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("score", "score must be a number")]);
    }

    #[test]
    fn test_wrong_type_uses_default_message() {
        let errors = SAMPLE.validate(&json!({"title": 12})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("title", "Expected string")]);
    }

    #[test]
    fn test_length_counts_characters() {
        // three Thai characters are nine bytes
        assert!(SAMPLE.validate(&json!({"title": "กขค"})).is_ok());
        assert!(SAMPLE.validate(&json!({"title": "กข"})).is_err());
    }

    #[test]
    fn test_range_bounds() {
        let errors = SAMPLE
            .validate(&json!({"title": "abc", "score": 10.5}))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("score", "too high")]);

        let errors = SAMPLE
            .validate(&json!({"title": "abc", "score": -1}))
            .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("score", "too low")]);
    }

    #[test]
    fn test_positive_excludes_zero() {
        assert!(SAMPLE.validate(&json!({"title": "abc", "price": 0.01})).is_ok());
        assert!(SAMPLE.validate(&json!({"title": "abc", "price": 0})).is_err());
        assert!(SAMPLE.validate(&json!({"title": "abc", "price": -5})).is_err());
    }

    #[test]
    fn test_collects_every_violation() {
        let errors = SAMPLE
            .validate(&json!({"title": "a", "score": 99, "price": -1}))
            .unwrap_err();
        assert_eq!(paths(&errors), vec!["title", "score", "price"]);
    }

    #[test]
    fn test_non_object_body() {
        let errors = SAMPLE.validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("", "Expected object")]);
    }
}
