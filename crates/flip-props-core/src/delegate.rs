//! Prop delegation — caller fields outside the schema
//!
//! Delegated props are computed from the caller's original keys, not from
//! the working copy, so internally derived fields never leak into them.
//! The legacy `disableAnimations` field is consumed by the deprecation shim
//! and is not delegated either. `delegated` names the bag itself and is
//! reserved.

use crate::schema::{self, DELEGATED, DISABLE_ANIMATIONS, STYLE};
use crate::value::{map_to_json, omit, RawConfig, RawMap, RawValue};

/// Attributes forwarded untouched to the rendered root element
#[derive(Debug, Clone, PartialEq)]
pub struct Delegated {
    attributes: RawMap,
}

impl Delegated {
    /// Delegated props carrying only the default style
    pub fn empty() -> Self {
        let mut attributes = RawMap::new();
        attributes.insert(STYLE.into(), RawValue::Object(merge_style(None)));
        Self { attributes }
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.attributes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The merged style object. `Some` for every value built by this module.
    pub fn style(&self) -> Option<&RawMap> {
        self.attributes.get(STYLE).and_then(RawValue::as_object)
    }

    pub fn as_map(&self) -> &RawMap {
        &self.attributes
    }

    pub fn to_json(&self) -> serde_json::Value {
        map_to_json(&self.attributes)
    }
}

impl Default for Delegated {
    fn default() -> Self {
        Self::empty()
    }
}

/// `{ position: "relative", ...caller_style }`.
///
/// A non-object caller style contributes nothing.
pub fn merge_style(caller_style: Option<&RawValue>) -> RawMap {
    let mut style = RawMap::new();
    style.insert("position".into(), RawValue::from("relative"));
    if let Some(RawValue::Object(caller)) = caller_style {
        for (k, v) in caller {
            style.insert(k.clone(), v.clone());
        }
    }
    style
}

/// Split the caller's unrecognized fields off into delegated props
pub fn delegate(raw: &RawConfig) -> Delegated {
    let known = schema::field_names().chain([DISABLE_ANIMATIONS, DELEGATED]);
    let mut attributes = omit(raw.as_map(), known);
    let style = merge_style(attributes.get(STYLE));
    attributes.insert(STYLE.into(), RawValue::Object(style));
    Delegated { attributes }
}

/// Remove every delegated key from the working configuration
pub fn strip_delegated(working: &mut RawMap, delegated: &Delegated) {
    working.retain(|k, _| !delegated.contains_key(k));
}
