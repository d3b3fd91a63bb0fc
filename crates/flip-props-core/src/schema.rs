//! Recognized field schema
//!
//! The fixed set of fields the normalizer understands, with the raw value
//! kinds each accepts and its single default. Everything outside this set
//! is delegated to the rendered root element.

use crate::preset::DEFAULT_PRESET;
use crate::value::RawValue;

pub const EASING: &str = "easing";
pub const DURATION: &str = "duration";
pub const DELAY: &str = "delay";
pub const STAGGER_DURATION_BY: &str = "staggerDurationBy";
pub const STAGGER_DELAY_BY: &str = "staggerDelayBy";
pub const TYPE_NAME: &str = "typeName";
pub const ENTER_CLASS_NAME: &str = "enterClassName";
pub const LEAVE_CLASS_NAME: &str = "leaveClassName";
pub const DISABLE_ALL_ANIMATIONS: &str = "disableAllAnimations";
pub const GET_POSITION: &str = "getPosition";
pub const MAINTAIN_CONTAINER_HEIGHT: &str = "maintainContainerHeight";
pub const CHILDREN: &str = "children";
pub const ON_START: &str = "onStart";
pub const ON_FINISH: &str = "onFinish";
pub const ON_START_ALL: &str = "onStartAll";
pub const ON_FINISH_ALL: &str = "onFinishAll";

/// Legacy spelling of `disableAllAnimations`. Not part of the schema.
pub const DISABLE_ANIMATIONS: &str = "disableAnimations";

/// Style key forced onto delegated props
pub const STYLE: &str = "style";

/// Name of the delegated-props bag on the canonical configuration.
/// Callers may not supply it.
pub const DELEGATED: &str = "delegated";

/// A raw value kind a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Number,
    Bool,
    /// A `{from, to}` object
    Shape,
    Callable,
    Any,
}

impl ValueType {
    pub fn matches(&self, value: &RawValue) -> bool {
        match self {
            ValueType::Text => matches!(value, RawValue::Text(_)),
            ValueType::Number => matches!(value, RawValue::Number(_)),
            ValueType::Bool => matches!(value, RawValue::Bool(_)),
            ValueType::Shape => matches!(value, RawValue::Object(_)),
            ValueType::Callable => matches!(value, RawValue::Callback(_)),
            ValueType::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Bool => "boolean",
            ValueType::Shape => "shape object",
            ValueType::Callable => "callable",
            ValueType::Any => "any",
        }
    }
}

/// Declared default of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Integer(i64),
    Bool(bool),
    /// A named preset from the preset registry
    Preset(&'static str),
    /// The platform bounding-box getter
    PlatformPosition,
    /// An empty children sequence
    EmptyChildren,
    /// No value
    Unset,
}

impl FieldDefault {
    /// The default as a raw value, for defaults that have one
    pub fn to_raw(&self) -> Option<RawValue> {
        match *self {
            FieldDefault::Text(s) | FieldDefault::Preset(s) => Some(RawValue::from(s)),
            FieldDefault::Integer(n) => Some(RawValue::from(n)),
            FieldDefault::Bool(b) => Some(RawValue::Bool(b)),
            FieldDefault::EmptyChildren => Some(RawValue::List(Vec::new())),
            FieldDefault::PlatformPosition | FieldDefault::Unset => None,
        }
    }
}

/// One recognized field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub accepts: &'static [ValueType],
    pub default: FieldDefault,
    pub required: bool,
}

impl FieldSpec {
    const fn optional(
        name: &'static str,
        accepts: &'static [ValueType],
        default: FieldDefault,
    ) -> Self {
        Self {
            name,
            accepts,
            default,
            required: false,
        }
    }

    pub fn accepts(&self, value: &RawValue) -> bool {
        self.accepts.iter().any(|t| t.matches(value))
    }

    /// e.g. `"text or number"`
    pub fn expected(&self) -> String {
        self.accepts
            .iter()
            .map(ValueType::as_str)
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// Integer default, for timing fields
    pub fn default_integer(&self) -> Option<i64> {
        match self.default {
            FieldDefault::Integer(n) => Some(n),
            _ => None,
        }
    }
}

const TIMING: &[ValueType] = &[ValueType::Text, ValueType::Number];
const TEXT: &[ValueType] = &[ValueType::Text];
const BOOL: &[ValueType] = &[ValueType::Bool];
const CALLABLE: &[ValueType] = &[ValueType::Callable];
const ANIMATION: &[ValueType] = &[
    ValueType::Bool,
    ValueType::Text,
    ValueType::Shape,
    ValueType::Callable,
];

/// The recognized field schema, in declaration order
pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec::optional(EASING, TEXT, FieldDefault::Text("ease-in-out")),
    FieldSpec::optional(DURATION, TIMING, FieldDefault::Integer(350)),
    FieldSpec::optional(DELAY, TIMING, FieldDefault::Integer(0)),
    FieldSpec::optional(STAGGER_DURATION_BY, TIMING, FieldDefault::Integer(0)),
    FieldSpec::optional(STAGGER_DELAY_BY, TIMING, FieldDefault::Integer(0)),
    FieldSpec::optional(TYPE_NAME, TEXT, FieldDefault::Text("div")),
    FieldSpec::optional(ENTER_CLASS_NAME, ANIMATION, FieldDefault::Preset(DEFAULT_PRESET)),
    FieldSpec::optional(LEAVE_CLASS_NAME, ANIMATION, FieldDefault::Preset(DEFAULT_PRESET)),
    FieldSpec::optional(DISABLE_ALL_ANIMATIONS, BOOL, FieldDefault::Bool(false)),
    FieldSpec::optional(GET_POSITION, CALLABLE, FieldDefault::PlatformPosition),
    FieldSpec {
        name: MAINTAIN_CONTAINER_HEIGHT,
        accepts: BOOL,
        default: FieldDefault::Bool(false),
        required: true,
    },
    FieldSpec::optional(CHILDREN, &[ValueType::Any], FieldDefault::EmptyChildren),
    FieldSpec::optional(ON_START, CALLABLE, FieldDefault::Unset),
    FieldSpec::optional(ON_FINISH, CALLABLE, FieldDefault::Unset),
    FieldSpec::optional(ON_START_ALL, CALLABLE, FieldDefault::Unset),
    FieldSpec::optional(ON_FINISH_ALL, CALLABLE, FieldDefault::Unset),
];

/// The four timing fields, in coercion order
pub const TIMING_FIELDS: [&str; 4] = [DURATION, DELAY, STAGGER_DURATION_BY, STAGGER_DELAY_BY];

/// Look up a recognized field
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|f| f.name == name)
}

pub fn is_recognized(name: &str) -> bool {
    field(name).is_some()
}

pub fn field_names() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|f| f.name)
}
