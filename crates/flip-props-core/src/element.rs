//! Child elements as seen by the normalizer
//!
//! The normalizer never renders anything; it only needs to know an
//! element's kind (can it hold an instance reference?) and its key.

use crate::value::{map_to_json, RawMap, RawValue};

/// What sort of component an element instantiates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A platform primitive (`div`, `li`, ...)
    Host,
    /// A component that owns instance state
    Class,
    /// A function component with no instance to reference
    Stateless,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Host => "host",
            ElementKind::Class => "class",
            ElementKind::Stateless => "stateless",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "host" => Some(ElementKind::Host),
            "class" => Some(ElementKind::Class),
            "stateless" => Some(ElementKind::Stateless),
            _ => None,
        }
    }

    /// Lowercase type names are platform primitives, anything else is a component
    fn infer(type_name: &str) -> Self {
        match type_name.chars().next() {
            Some(c) if c.is_ascii_lowercase() => ElementKind::Host,
            _ => ElementKind::Class,
        }
    }
}

/// A single renderable element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub type_name: String,
    pub kind: ElementKind,
    pub key: Option<String>,
    pub props: RawMap,
}

impl Element {
    pub fn new(type_name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            type_name: type_name.into(),
            kind,
            key: None,
            props: RawMap::new(),
        }
    }

    pub fn host(tag: impl Into<String>) -> Self {
        Self::new(tag, ElementKind::Host)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Class)
    }

    pub fn stateless(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Stateless)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Capability check: stateless elements cannot carry an instance reference
    pub fn is_stateless(&self) -> bool {
        self.kind == ElementKind::Stateless
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Interpret a plain object as an element description.
    ///
    /// Shape: `{ "type": "li", "key": "a", "kind": "host", "props": {...} }`.
    /// Only `type` is required; `kind` is inferred from the type name's case
    /// when absent. Returns `None` when the object does not describe an element.
    pub fn from_object(map: &RawMap) -> Option<Self> {
        let type_name = map.get("type")?.as_str()?;
        let kind = match map.get("kind") {
            Some(RawValue::Text(k)) => ElementKind::parse(k)?,
            Some(RawValue::Null) | None => ElementKind::infer(type_name),
            Some(_) => return None,
        };
        let key = match map.get("key") {
            Some(RawValue::Text(k)) => Some(k.clone()),
            Some(RawValue::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        let props = map
            .get("props")
            .and_then(RawValue::as_object)
            .cloned()
            .unwrap_or_default();
        Some(Self {
            type_name: type_name.to_string(),
            kind,
            key,
            props,
        })
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        out.insert("type".into(), self.type_name.clone().into());
        out.insert("kind".into(), self.kind.as_str().into());
        if let Some(ref key) = self.key {
            out.insert("key".into(), key.clone().into());
        }
        if !self.props.is_empty() {
            out.insert("props".into(), map_to_json(&self.props));
        }
        serde_json::Value::Object(out)
    }
}

/// One entry of a canonical children sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(Element),
    Text(String),
}

impl Child {
    pub fn key(&self) -> Option<&str> {
        match self {
            Child::Element(el) => el.key(),
            Child::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Child::Element(el) => Some(el),
            Child::Text(_) => None,
        }
    }

    pub fn to_raw(&self) -> RawValue {
        match self {
            Child::Element(el) => RawValue::Element(el.clone()),
            Child::Text(s) => RawValue::Text(s.clone()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Child::Element(el) => el.to_json(),
            Child::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}
