//! Schema validation — explicit pre-normalization check
//!
//! Runs over the raw configuration before any defaulting and reports every
//! violation found rather than stopping at the first one. Validation never
//! changes the configuration; the normalizer decides what a violation means.

use std::fmt;

use crate::schema::{FieldSpec, SCHEMA};
use crate::value::RawConfig;

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is absent or `null`
    MissingRequired { field: &'static str },
    /// A field is present with a value kind the schema does not accept
    WrongType {
        field: &'static str,
        expected: String,
        found: &'static str,
    },
}

impl Violation {
    pub fn field(&self) -> &'static str {
        match self {
            Violation::MissingRequired { field } => field,
            Violation::WrongType { field, .. } => field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::MissingRequired { field } => {
                write!(f, "required field '{}' was not provided", field)
            }
            Violation::WrongType {
                field,
                expected,
                found,
            } => write!(f, "field '{}' expects {}, found {}", field, expected, found),
        }
    }
}

/// Accumulated result of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn missing_required(&self) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::MissingRequired { .. }))
            .collect()
    }

    pub fn wrong_types(&self) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::WrongType { .. }))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(f, "no violations");
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Validate a raw configuration against the recognized schema.
///
/// Fields outside the schema are never violations; they are delegated.
pub fn validate(raw: &RawConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    for spec in SCHEMA {
        check_field(spec, raw, &mut report);
    }
    report
}

fn check_field(spec: &FieldSpec, raw: &RawConfig, report: &mut ValidationReport) {
    if !raw.is_provided(spec.name) {
        if spec.required {
            report
                .violations
                .push(Violation::MissingRequired { field: spec.name });
        }
        return;
    }
    if let Some(value) = raw.get(spec.name) {
        if !spec.accepts(value) {
            report.violations.push(Violation::WrongType {
                field: spec.name,
                expected: spec.expected(),
                found: value.kind_name(),
            });
        }
    }
}
