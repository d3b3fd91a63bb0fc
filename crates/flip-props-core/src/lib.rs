//! Flip Props - configuration normalization for the flip animation orchestrator
//!
//! Callers describe an animated list with a loosely-typed configuration:
//! timings as text or numbers, animations as flags, preset names, shapes or
//! functions, children in any shape, plus arbitrary attributes for the
//! rendered root element. This crate turns that into one strictly-typed
//! [`CanonicalConfig`] and a separate bag of delegated attributes.
//!
//! # Architecture
//!
//! ```text
//! RawConfig → Validator → violations
//!     ↓
//!  Normalizer → children → capabilities → timing → shapes → shim → delegation
//!     ↓
//!  CanonicalConfig → Composed component
//!     ↓
//!  PresetRegistry resolves enter/leave descriptors on demand
//! ```
//!
//! # Guarantees
//!
//! - **Total**: normalization never fails; problems become diagnostics
//! - **Stateless**: nothing is cached between calls
//! - **Disjoint**: no delegated key appears at the top level

pub mod capability;
pub mod children;
pub mod delegate;
pub mod diagnostics;
pub mod element;
pub mod error;
pub mod messages;
pub mod normalizer;
pub mod preset;
pub mod schema;
pub mod shape;
pub mod timing;
pub mod validate;
pub mod value;

pub use delegate::Delegated;
pub use diagnostics::{
    Diagnostic, DiagnosticContext, DiagnosticKind, DiagnosticSink, DiagnosticsExt, LogSink,
    NullSink, Severity,
};
pub use element::{Child, Element, ElementKind};
pub use error::{Error, Result};
pub use normalizer::{
    normalize, normalize_with, try_normalize, CanonicalConfig, Composed, ConfigNormalizer, Hooks,
    NormalizerOptions, PositionGetter,
};
pub use preset::{PresetRegistry, PresetTable, DEFAULT_PRESET, DISABLE_PRESET};
pub use shape::{AnimationDescriptor, AnimationShape, ShapeGenerator};
pub use validate::{validate, ValidationReport, Violation};
pub use value::{omit, Callback, RawConfig, RawMap, RawValue};
