//! Preset registry — turns descriptors into concrete shapes
//!
//! The normalizer never resolves presets; it only guarantees that
//! enter/leave descriptors are callable. Resolution happens here, on the
//! orchestrator's side, through [`PresetRegistry`].

use indexmap::IndexMap;

use crate::diagnostics::{Diagnostic, DiagnosticContext, DiagnosticSink};
use crate::shape::{AnimationDescriptor, AnimationShape};

/// Preset used when none is specified, or when `true` is supplied
pub const DEFAULT_PRESET: &str = "elevator";

/// Preset name that disables an animation
pub const DISABLE_PRESET: &str = "none";

/// Resolve a descriptor to a concrete shape, or `None` when disabled
pub trait PresetRegistry {
    fn resolve(&self, descriptor: &AnimationDescriptor) -> Option<AnimationShape>;
}

/// Map-backed registry. Ships empty; callers register their own presets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetTable {
    presets: IndexMap<String, AnimationShape>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(mut self, name: impl Into<String>, shape: AnimationShape) -> Self {
        self.insert(name, shape);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, shape: AnimationShape) {
        self.presets.insert(name.into(), shape);
    }

    pub fn get(&self, name: &str) -> Option<&AnimationShape> {
        self.presets.get(name)
    }

    /// Every name `resolve` accepts, including the disable preset
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.presets.keys().cloned().collect();
        if !self.presets.contains_key(DISABLE_PRESET) {
            names.push(DISABLE_PRESET.to_string());
        }
        names
    }

    /// Like [`PresetRegistry::resolve`], reporting unknown preset names.
    ///
    /// Unknown names fall back to the default preset.
    pub fn resolve_with(
        &self,
        descriptor: &AnimationDescriptor,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<AnimationShape> {
        match descriptor {
            AnimationDescriptor::Flag(false) => None,
            AnimationDescriptor::Flag(true) => self.get(DEFAULT_PRESET).cloned(),
            AnimationDescriptor::Preset(name) if name == DISABLE_PRESET => None,
            AnimationDescriptor::Preset(name) => match self.get(name) {
                Some(shape) => Some(shape.clone()),
                None => {
                    sink.emit(Diagnostic::warning(DiagnosticContext::InvalidPreset {
                        name: name.clone(),
                        acceptable: self.names(),
                        fallback: DEFAULT_PRESET.to_string(),
                    }));
                    self.get(DEFAULT_PRESET).cloned()
                }
            },
            AnimationDescriptor::Shape(shape) => Some(shape.clone()),
            AnimationDescriptor::Generator(g) => self.resolve_with(&g.call(), sink),
        }
    }
}

impl PresetRegistry for PresetTable {
    fn resolve(&self, descriptor: &AnimationDescriptor) -> Option<AnimationShape> {
        self.resolve_with(descriptor, &mut crate::diagnostics::LogSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::shape::ShapeGenerator;
    use crate::value::Callback;

    fn table() -> PresetTable {
        PresetTable::new()
            .with_preset(DEFAULT_PRESET, AnimationShape::new("scale(0)", "scale(1)"))
            .with_preset("fade", AnimationShape::new("0", "1"))
    }

    #[test]
    fn test_flags() {
        let t = table();
        assert_eq!(t.resolve(&AnimationDescriptor::Flag(false)), None);
        assert_eq!(
            t.resolve(&AnimationDescriptor::Flag(true)),
            Some(AnimationShape::new("scale(0)", "scale(1)"))
        );
    }

    #[test]
    fn test_named_and_disable_presets() {
        let t = table();
        assert_eq!(
            t.resolve(&AnimationDescriptor::Preset("fade".into())),
            Some(AnimationShape::new("0", "1"))
        );
        assert_eq!(t.resolve(&AnimationDescriptor::Preset(DISABLE_PRESET.into())), None);
    }

    #[test]
    fn test_unknown_preset_falls_back_with_diagnostic() {
        let t = table();
        let mut diags: Vec<Diagnostic> = Vec::new();
        let shape = t.resolve_with(&AnimationDescriptor::Preset("wobble".into()), &mut diags);
        assert_eq!(shape, t.get(DEFAULT_PRESET).cloned());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), DiagnosticKind::InvalidPreset);
        assert!(diags[0].message.contains("wobble"));
    }

    #[test]
    fn test_concrete_shape_and_generator() {
        let t = PresetTable::new();
        let shape = AnimationShape::new("a", "b");
        assert_eq!(t.resolve(&AnimationDescriptor::Shape(shape.clone())), Some(shape.clone()));

        let raw = shape.to_raw();
        let g = ShapeGenerator::dynamic(Callback::new(move |_| raw.clone()));
        assert_eq!(t.resolve(&AnimationDescriptor::Generator(g)), Some(shape));
    }

    #[test]
    fn test_names_include_disable_preset() {
        let names = table().names();
        assert_eq!(names, vec!["elevator", "fade", "none"]);
    }
}
