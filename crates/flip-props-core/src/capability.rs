//! Capability validator — flags keyed children that cannot be animated
//!
//! Every keyed child is tracked by the orchestrator through an instance
//! reference. Stateless components have no instance, so a keyed stateless
//! child cannot be animated. Unkeyed children are never tracked and are
//! always accepted.

use crate::diagnostics::{Diagnostic, DiagnosticContext, DiagnosticSink};
use crate::element::{Child, Element};

/// Children that are both stateless and keyed, in order
pub fn unsupported_children(children: &[Child]) -> Vec<&Element> {
    children
        .iter()
        .filter_map(Child::as_element)
        .filter(|el| el.is_stateless() && el.key().is_some())
        .collect()
}

/// Emit one aggregate warning if any child is unsupported.
///
/// Never alters the children. Returns true if all children are supported.
pub fn check_capabilities(children: &[Child], sink: &mut dyn DiagnosticSink) -> bool {
    let offending = unsupported_children(children);
    if offending.is_empty() {
        return true;
    }
    let names = offending.iter().map(|el| el.type_name.clone()).collect();
    sink.emit(Diagnostic::warning(DiagnosticContext::StatelessChildren {
        names,
    }));
    false
}
