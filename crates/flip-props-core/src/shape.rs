//! Animation descriptors and the callable wrapper around them
//!
//! Callers describe enter/leave animations four ways: a flag, a preset
//! name, a concrete `{from, to}` shape, or a function producing one of
//! those. [`AnimationDescriptor`] is that tagged union. The normalizer's
//! only job is to turn any descriptor into a [`ShapeGenerator`] so the
//! orchestrator can always call it the same way.

use std::fmt;

use crate::preset::DEFAULT_PRESET;
use crate::value::{Callback, RawMap, RawValue};

/// Start and end visual state of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationShape {
    pub from: RawValue,
    pub to: RawValue,
}

impl AnimationShape {
    pub fn new(from: impl Into<RawValue>, to: impl Into<RawValue>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Missing `from`/`to` keys read as `null`
    pub fn from_object(map: &RawMap) -> Self {
        Self {
            from: map.get("from").cloned().unwrap_or(RawValue::Null),
            to: map.get("to").cloned().unwrap_or(RawValue::Null),
        }
    }

    pub fn to_raw(&self) -> RawValue {
        let mut map = RawMap::new();
        map.insert("from".into(), self.from.clone());
        map.insert("to".into(), self.to.clone());
        RawValue::Object(map)
    }
}

/// Any of the ways an enter/leave animation can be described
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationDescriptor {
    /// `true` selects the default preset, `false` disables the animation
    Flag(bool),
    Preset(String),
    Shape(AnimationShape),
    Generator(ShapeGenerator),
}

impl AnimationDescriptor {
    /// Read a descriptor from a raw value.
    ///
    /// Kinds that cannot describe an animation (numbers, lists, elements,
    /// `null`) read as the default preset; the validation pass reports them.
    pub fn from_raw(value: &RawValue) -> Self {
        match value {
            RawValue::Bool(b) => AnimationDescriptor::Flag(*b),
            RawValue::Text(name) => AnimationDescriptor::Preset(name.clone()),
            RawValue::Object(map) => AnimationDescriptor::Shape(AnimationShape::from_object(map)),
            RawValue::Callback(cb) => {
                AnimationDescriptor::Generator(ShapeGenerator::dynamic(cb.clone()))
            }
            _ => AnimationDescriptor::default(),
        }
    }

    pub fn to_raw(&self) -> RawValue {
        match self {
            AnimationDescriptor::Flag(b) => RawValue::Bool(*b),
            AnimationDescriptor::Preset(name) => RawValue::from(name.as_str()),
            AnimationDescriptor::Shape(shape) => shape.to_raw(),
            AnimationDescriptor::Generator(g) => g.to_raw(),
        }
    }
}

impl Default for AnimationDescriptor {
    fn default() -> Self {
        AnimationDescriptor::Preset(DEFAULT_PRESET.to_string())
    }
}

// ── ShapeGenerator ────────────────────────────────────────

#[derive(Clone, PartialEq)]
enum Source {
    Constant(Box<AnimationDescriptor>),
    Dynamic(Callback),
}

/// A zero-argument callable yielding an animation descriptor.
///
/// Calling it never yields [`AnimationDescriptor::Generator`]; a dynamic
/// callback returning another callable reads as the default preset.
#[derive(Clone, PartialEq)]
pub struct ShapeGenerator {
    source: Source,
}

impl ShapeGenerator {
    /// Always yields `descriptor`. Generators are unwrapped, not nested.
    pub fn constant(descriptor: AnimationDescriptor) -> Self {
        match descriptor {
            AnimationDescriptor::Generator(g) => g,
            other => Self {
                source: Source::Constant(Box::new(other)),
            },
        }
    }

    /// Defers to a caller-supplied function on every call
    pub fn dynamic(callback: Callback) -> Self {
        Self {
            source: Source::Dynamic(callback),
        }
    }

    pub fn call(&self) -> AnimationDescriptor {
        match &self.source {
            Source::Constant(d) => (**d).clone(),
            Source::Dynamic(cb) => match AnimationDescriptor::from_raw(&cb.call(&[])) {
                AnimationDescriptor::Generator(_) => AnimationDescriptor::default(),
                other => other,
            },
        }
    }

    /// The wrapped caller function, if this generator is dynamic
    pub fn callback(&self) -> Option<&Callback> {
        match &self.source {
            Source::Dynamic(cb) => Some(cb),
            Source::Constant(_) => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.callback().is_some()
    }

    /// The raw form a caller would have supplied to get this generator
    pub fn to_raw(&self) -> RawValue {
        match &self.source {
            Source::Constant(d) => d.to_raw(),
            Source::Dynamic(cb) => RawValue::Callback(cb.clone()),
        }
    }
}

impl fmt::Debug for ShapeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Constant(d) => f.debug_tuple("ShapeGenerator::Constant").field(d).finish(),
            Source::Dynamic(cb) => f.debug_tuple("ShapeGenerator::Dynamic").field(cb).finish(),
        }
    }
}

/// Guarantee callability: generators pass through untouched, every other
/// descriptor is wrapped in a constant generator.
pub fn ensure_callable(descriptor: AnimationDescriptor) -> ShapeGenerator {
    ShapeGenerator::constant(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_from_raw_variants() {
        assert_eq!(
            AnimationDescriptor::from_raw(&RawValue::Bool(false)),
            AnimationDescriptor::Flag(false)
        );
        assert_eq!(
            AnimationDescriptor::from_raw(&RawValue::from("fade")),
            AnimationDescriptor::Preset("fade".into())
        );
        let shape = AnimationShape::new("a", "b");
        assert_eq!(
            AnimationDescriptor::from_raw(&shape.to_raw()),
            AnimationDescriptor::Shape(shape)
        );
        assert_eq!(
            AnimationDescriptor::from_raw(&RawValue::from(5)),
            AnimationDescriptor::default()
        );
    }

    #[test]
    fn test_constant_generator_returns_exact_value() {
        let shape = AnimationDescriptor::Shape(AnimationShape::new("a", "b"));
        let g = ensure_callable(shape.clone());
        assert!(!g.is_dynamic());
        assert_eq!(g.call(), shape);
        assert_eq!(g.call(), shape);
    }

    #[test]
    fn test_generator_passes_through_unchanged() {
        let cb = Callback::new(|_| RawValue::from("fade"));
        let g = ensure_callable(AnimationDescriptor::from_raw(&RawValue::from(cb.clone())));
        assert!(g.callback().unwrap().ptr_eq(&cb));
        assert_eq!(g.call(), AnimationDescriptor::Preset("fade".into()));
    }

    #[test]
    fn test_dynamic_generator_called_each_time() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&counter);
        let cb = Callback::new(move |_| {
            let n = seen.fetch_add(1, Ordering::SeqCst);
            AnimationShape::new(format!("from-{}", n), "to").to_raw()
        });
        let g = ShapeGenerator::dynamic(cb);
        let first = g.call();
        let second = g.call();
        assert_ne!(first, second);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dynamic_returning_callable_reads_as_default() {
        let inner = Callback::new(|_| RawValue::Bool(true));
        let outer = Callback::new(move |_| RawValue::Callback(inner.clone()));
        let g = ShapeGenerator::dynamic(outer);
        assert_eq!(g.call(), AnimationDescriptor::default());
    }

    #[test]
    fn test_to_raw_round_trips_through_generator() {
        let g = ensure_callable(AnimationDescriptor::Flag(false));
        assert_eq!(g.to_raw(), RawValue::Bool(false));
    }
}
