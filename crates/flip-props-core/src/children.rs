//! Children canonicalizer — any child representation to a flat sequence
//!
//! Follows host flattening rules: nested lists are flattened in order,
//! `null` and booleans render nothing and are dropped, text and numbers
//! become text children. Entries that cannot be rendered at all are
//! returned separately so the caller can report them.

use crate::element::{Child, Element};
use crate::value::RawValue;

/// Output of [`canonicalize_children`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalChildren {
    pub children: Vec<Child>,
    /// Entries that are neither elements nor text, in encounter order
    pub rejected: Vec<RawValue>,
}

/// Flatten a raw `children` value. Absent input yields an empty sequence.
pub fn canonicalize_children(value: Option<&RawValue>) -> CanonicalChildren {
    let mut out = CanonicalChildren::default();
    if let Some(value) = value {
        flatten_into(value, &mut out);
    }
    out
}

fn flatten_into(value: &RawValue, out: &mut CanonicalChildren) {
    match value {
        RawValue::Null | RawValue::Bool(_) => {}
        RawValue::Text(s) => out.children.push(Child::Text(s.clone())),
        RawValue::Number(n) => out.children.push(Child::Text(n.to_string())),
        RawValue::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        RawValue::Element(el) => out.children.push(Child::Element(el.clone())),
        RawValue::Object(map) => match Element::from_object(map) {
            Some(el) => out.children.push(Child::Element(el)),
            None => out.rejected.push(value.clone()),
        },
        RawValue::Callback(_) => out.rejected.push(value.clone()),
    }
}
