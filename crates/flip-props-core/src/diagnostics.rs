//! Diagnostics — structured, non-fatal reports emitted during normalization
//!
//! Every recoverable problem found by the pipeline is reported through a
//! caller-supplied [`DiagnosticSink`]. Emission never affects control flow:
//! the pipeline always continues and always produces a configuration.

use std::fmt;

use crate::messages;
use crate::validate::Violation;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Category of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    StatelessChild,
    InvalidChild,
    InvalidTiming,
    DeprecatedField,
    InvalidPreset,
    ReservedField,
    SchemaViolation,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiagnosticKind::StatelessChild => write!(f, "stateless-child"),
            DiagnosticKind::InvalidChild => write!(f, "invalid-child"),
            DiagnosticKind::InvalidTiming => write!(f, "timing"),
            DiagnosticKind::DeprecatedField => write!(f, "deprecated"),
            DiagnosticKind::InvalidPreset => write!(f, "preset"),
            DiagnosticKind::ReservedField => write!(f, "reserved"),
            DiagnosticKind::SchemaViolation => write!(f, "schema"),
        }
    }
}

/// Structured context carried by a diagnostic
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticContext {
    /// Type names of keyed stateless children, in order
    StatelessChildren { names: Vec<String> },
    InvalidChild { value: String },
    InvalidTiming {
        field: &'static str,
        value: String,
        fallback: i64,
    },
    DeprecatedField {
        field: &'static str,
        replacement: &'static str,
    },
    InvalidPreset {
        name: String,
        acceptable: Vec<String>,
        fallback: String,
    },
    ReservedField { field: &'static str },
    Violation(Violation),
}

impl DiagnosticContext {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            DiagnosticContext::StatelessChildren { .. } => DiagnosticKind::StatelessChild,
            DiagnosticContext::InvalidChild { .. } => DiagnosticKind::InvalidChild,
            DiagnosticContext::InvalidTiming { .. } => DiagnosticKind::InvalidTiming,
            DiagnosticContext::DeprecatedField { .. } => DiagnosticKind::DeprecatedField,
            DiagnosticContext::InvalidPreset { .. } => DiagnosticKind::InvalidPreset,
            DiagnosticContext::ReservedField { .. } => DiagnosticKind::ReservedField,
            DiagnosticContext::Violation(_) => DiagnosticKind::SchemaViolation,
        }
    }

    /// The configuration field this diagnostic is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            DiagnosticContext::InvalidTiming { field, .. } => Some(*field),
            DiagnosticContext::DeprecatedField { field, .. } => Some(*field),
            DiagnosticContext::ReservedField { field } => Some(*field),
            DiagnosticContext::Violation(v) => Some(v.field()),
            DiagnosticContext::StatelessChildren { .. } | DiagnosticContext::InvalidChild { .. } => {
                Some("children")
            }
            DiagnosticContext::InvalidPreset { .. } => None,
        }
    }

    fn message(&self) -> String {
        match self {
            DiagnosticContext::StatelessChildren { names } => {
                messages::stateless_children_supplied(names)
            }
            DiagnosticContext::InvalidChild { value } => messages::invalid_child(value),
            DiagnosticContext::InvalidTiming {
                field,
                value,
                fallback,
            } => messages::invalid_timing_value(field, value, *fallback),
            DiagnosticContext::DeprecatedField { field, replacement } => {
                messages::deprecated_field(field, replacement)
            }
            DiagnosticContext::InvalidPreset {
                name,
                acceptable,
                fallback,
            } => messages::invalid_preset(name, acceptable, fallback),
            DiagnosticContext::ReservedField { field } => messages::reserved_field(field),
            DiagnosticContext::Violation(v) => messages::schema_violation(v),
        }
    }
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub context: DiagnosticContext,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, context: DiagnosticContext) -> Self {
        let message = context.message();
        Self {
            severity,
            context,
            message,
        }
    }

    pub fn warning(context: DiagnosticContext) -> Self {
        Self::new(Severity::Warning, context)
    }

    pub fn error(context: DiagnosticContext) -> Self {
        Self::new(Severity::Error, context)
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.context.kind()
    }

    pub fn field(&self) -> Option<&str> {
        self.context.field()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{} [{}]: {}", prefix, self.kind(), self.message)
    }
}

// ── Sinks ─────────────────────────────────────────────────

/// Destination for diagnostics. Emission is fire-and-forget.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Collect into a vector (tests, CLI reporting)
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Forward diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => log::error!(target: "flip_props", "{}", diagnostic.message),
            Severity::Warning => log::warn!(target: "flip_props", "{}", diagnostic.message),
        }
    }
}

/// Drop everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Convenience queries over collected diagnostics
pub trait DiagnosticsExt {
    fn errors(&self) -> Vec<&Diagnostic>;
    fn warnings(&self) -> Vec<&Diagnostic>;
    fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic>;
}

impl DiagnosticsExt for [Diagnostic] {
    fn errors(&self) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.severity == Severity::Error).collect()
    }

    fn warnings(&self) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.severity == Severity::Warning).collect()
    }

    fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.iter().filter(|d| d.kind() == kind).collect()
    }
}
