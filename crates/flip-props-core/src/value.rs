//! Loosely-typed raw values — what callers hand to the normalizer
//!
//! A raw configuration is an ordered mapping of field name to `RawValue`.
//! Nothing about it is trusted: any field may be absent, mistyped, or
//! unknown to the schema. Key order follows insertion order so that
//! delegated attributes keep the caller's ordering.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::element::Element;
use crate::{Error, Result};

/// Ordered field map used for raw configurations, objects and delegated props
pub type RawMap = IndexMap<String, RawValue>;

// ── Callback ──────────────────────────────────────────────

type CallbackFn = dyn Fn(&[RawValue]) -> RawValue + Send + Sync;

/// An opaque caller-supplied function.
///
/// Equality is identity: two callbacks are equal only if they share the
/// same allocation, which is what lets callers observe that a callable
/// passed through normalization untouched.
#[derive(Clone)]
pub struct Callback {
    func: Arc<CallbackFn>,
}

impl Callback {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[RawValue]) -> RawValue + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    pub fn call(&self, args: &[RawValue]) -> RawValue {
        (self.func)(args)
    }

    /// True if both handles point to the same function
    pub fn ptr_eq(&self, other: &Callback) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Arc::as_ptr(&self.func) as *const ())
    }
}

// ── RawValue ──────────────────────────────────────────────

/// A single untyped value inside a raw configuration
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    /// All numbers are carried as f64, including NaN
    Number(f64),
    Text(String),
    List(Vec<RawValue>),
    Object(RawMap),
    Element(Element),
    Callback(Callback),
}

impl RawValue {
    /// Human-readable kind name used in diagnostics and violations
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "text",
            RawValue::List(_) => "list",
            RawValue::Object(_) => "object",
            RawValue::Element(_) => "element",
            RawValue::Callback(_) => "callable",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Loose boolean reading: `null`, `false`, `0`, NaN and `""` are false,
    /// everything else is true
    pub fn is_truthy(&self) -> bool {
        match self {
            RawValue::Null => false,
            RawValue::Bool(b) => *b,
            RawValue::Text(s) => !s.is_empty(),
            RawValue::Number(_) => self.as_number().map_or(false, |n| n != 0.0 && !n.is_nan()),
            _ => true,
        }
    }

    pub fn as_object(&self) -> Option<&RawMap> {
        match self {
            RawValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            RawValue::Callback(cb) => Some(cb),
            _ => None,
        }
    }

    /// JSON view of the value. Callables have no JSON form and render as
    /// the marker string `"[callable]"`; non-finite numbers render as text.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            RawValue::Null => Json::Null,
            RawValue::Bool(b) => Json::Bool(*b),
            RawValue::Number(n) => number_to_json(*n),
            RawValue::Text(s) => Json::String(s.clone()),
            RawValue::List(items) => Json::Array(items.iter().map(RawValue::to_json).collect()),
            RawValue::Object(map) => map_to_json(map),
            RawValue::Element(el) => el.to_json(),
            RawValue::Callback(_) => Json::String("[callable]".into()),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(n.to_string()))
    }
}

/// JSON view of an ordered field map
pub fn map_to_json(map: &RawMap) -> serde_json::Value {
    serde_json::Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Callback(_) => write!(f, "[callable]"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => RawValue::Null,
            Json::Bool(b) => RawValue::Bool(b),
            Json::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => RawValue::Text(s),
            Json::Array(items) => RawValue::List(items.into_iter().map(RawValue::from).collect()),
            Json::Object(map) => RawValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, RawValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        RawValue::List(items)
    }
}

impl From<RawMap> for RawValue {
    fn from(map: RawMap) -> Self {
        RawValue::Object(map)
    }
}

impl From<Element> for RawValue {
    fn from(el: Element) -> Self {
        RawValue::Element(el)
    }
}

impl From<Callback> for RawValue {
    fn from(cb: Callback) -> Self {
        RawValue::Callback(cb)
    }
}

// ── RawConfig ─────────────────────────────────────────────

/// The caller's configuration exactly as supplied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    fields: RawMap,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// A field counts as provided when it is present and not `null`
    pub fn is_provided(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(|v| !v.is_null())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &RawMap {
        &self.fields
    }

    pub fn into_map(self) -> RawMap {
        self.fields
    }

    /// Parse a raw configuration from JSON text.
    ///
    /// # Errors
    /// `Json` for malformed text, `InvalidInput` if the root is not an object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    /// Read a raw configuration from a JSON file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, otherwise as [`RawConfig::from_json_str`].
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Build a raw configuration from a decoded JSON document
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match RawValue::from(value) {
            RawValue::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidInput(format!(
                "configuration root must be an object, found {}",
                other.kind_name()
            ))),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        map_to_json(&self.fields)
    }
}

impl From<RawMap> for RawConfig {
    fn from(fields: RawMap) -> Self {
        Self { fields }
    }
}

/// Return a copy of `map` without the given keys, preserving order
pub fn omit<'a, I>(map: &RawMap, keys: I) -> RawMap
where
    I: IntoIterator<Item = &'a str>,
{
    let drop: Vec<&str> = keys.into_iter().collect();
    map.iter()
        .filter(|(k, _)| !drop.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
