//! Configuration normalizer — raw caller configuration to canonical form
//!
//! # Pipeline
//!
//! ```text
//! RawConfig → validate → merge defaults → children → capabilities
//!           → timing → animation shapes → deprecation shim → delegation
//!           → CanonicalConfig
//! ```
//!
//! Every step always produces a usable value. Problems are reported to the
//! injected [`DiagnosticSink`] and never abort the pipeline; only
//! [`try_normalize`] turns schema violations into an `Err`.
//!
//! # Guarantees
//!
//! - **Pure**: no state survives between calls; the schema is read-only
//! - **Total**: any raw configuration yields a canonical configuration
//! - **Stable**: re-normalizing a canonical configuration's own fields is a no-op

use serde::Deserialize;

use crate::capability::check_capabilities;
use crate::children::canonicalize_children;
use crate::delegate::{delegate, strip_delegated, Delegated};
use crate::diagnostics::{Diagnostic, DiagnosticContext, DiagnosticKind, DiagnosticSink};
use crate::element::Child;
use crate::schema::{self, DELEGATED, DISABLE_ALL_ANIMATIONS, DISABLE_ANIMATIONS, SCHEMA};
use crate::shape::{ensure_callable, AnimationDescriptor, ShapeGenerator};
use crate::timing::coerce_all;
use crate::validate::validate;
use crate::value::{Callback, RawConfig, RawMap, RawValue};
use crate::{Error, Result};

// ── Canonical configuration ───────────────────────────────

/// How the orchestrator measures child positions
#[derive(Debug, Clone, PartialEq)]
pub enum PositionGetter {
    /// The platform's bounding-box measurement
    Platform,
    Custom(Callback),
}

/// Optional lifecycle callbacks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hooks {
    pub on_start: Option<Callback>,
    pub on_finish: Option<Callback>,
    pub on_start_all: Option<Callback>,
    pub on_finish_all: Option<Callback>,
}

/// The strictly-typed configuration handed to the orchestrator
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalConfig {
    pub children: Vec<Child>,
    pub easing: String,
    pub duration: i64,
    pub delay: i64,
    pub stagger_duration_by: i64,
    pub stagger_delay_by: i64,
    pub type_name: String,
    pub enter_class_name: ShapeGenerator,
    pub leave_class_name: ShapeGenerator,
    pub disable_all_animations: bool,
    pub get_position: PositionGetter,
    pub maintain_container_height: bool,
    pub hooks: Hooks,
    pub delegated: Delegated,
}

impl CanonicalConfig {
    /// The non-delegated fields, re-expressed as a raw configuration
    pub fn to_raw(&self) -> RawConfig {
        let mut raw = RawConfig::new()
            .with(
                schema::CHILDREN,
                RawValue::List(self.children.iter().map(Child::to_raw).collect()),
            )
            .with(schema::EASING, self.easing.as_str())
            .with(schema::DURATION, self.duration)
            .with(schema::DELAY, self.delay)
            .with(schema::STAGGER_DURATION_BY, self.stagger_duration_by)
            .with(schema::STAGGER_DELAY_BY, self.stagger_delay_by)
            .with(schema::TYPE_NAME, self.type_name.as_str())
            .with(schema::ENTER_CLASS_NAME, self.enter_class_name.to_raw())
            .with(schema::LEAVE_CLASS_NAME, self.leave_class_name.to_raw())
            .with(DISABLE_ALL_ANIMATIONS, self.disable_all_animations)
            .with(schema::MAINTAIN_CONTAINER_HEIGHT, self.maintain_container_height);
        if let PositionGetter::Custom(ref cb) = self.get_position {
            raw.insert(schema::GET_POSITION, cb.clone());
        }
        let hooks = [
            (schema::ON_START, &self.hooks.on_start),
            (schema::ON_FINISH, &self.hooks.on_finish),
            (schema::ON_START_ALL, &self.hooks.on_start_all),
            (schema::ON_FINISH_ALL, &self.hooks.on_finish_all),
        ];
        for (name, hook) in hooks {
            if let Some(cb) = hook {
                raw.insert(name, cb.clone());
            }
        }
        raw
    }

    /// JSON view for inspection. Callables render as `"[callable]"`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        let callable = |cb: &Option<Callback>| match cb {
            Some(_) => json!("[callable]"),
            None => serde_json::Value::Null,
        };
        let children: Vec<serde_json::Value> = self.children.iter().map(Child::to_json).collect();
        let position = match self.get_position {
            PositionGetter::Platform => json!("platform"),
            PositionGetter::Custom(_) => json!("[callable]"),
        };
        json!({
            "children": children,
            "easing": self.easing,
            "duration": self.duration,
            "delay": self.delay,
            "staggerDurationBy": self.stagger_duration_by,
            "staggerDelayBy": self.stagger_delay_by,
            "typeName": self.type_name,
            "enterClassName": generator_json(&self.enter_class_name),
            "leaveClassName": generator_json(&self.leave_class_name),
            "disableAllAnimations": self.disable_all_animations,
            "getPosition": position,
            "maintainContainerHeight": self.maintain_container_height,
            "onStart": callable(&self.hooks.on_start),
            "onFinish": callable(&self.hooks.on_finish),
            "onStartAll": callable(&self.hooks.on_start_all),
            "onFinishAll": callable(&self.hooks.on_finish_all),
            "delegated": self.delegated.to_json(),
        })
    }
}

fn generator_json(g: &ShapeGenerator) -> serde_json::Value {
    if g.is_dynamic() {
        serde_json::Value::String("[callable]".into())
    } else {
        g.to_raw().to_json()
    }
}

// ── Options ───────────────────────────────────────────────

/// Normalizer switches. Every field defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizerOptions {
    /// Report schema violations as error diagnostics
    pub validate: bool,
    /// Report keyed stateless children
    pub check_children: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            validate: true,
            check_children: true,
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Normalize with default options.
pub fn normalize(raw: &RawConfig, sink: &mut dyn DiagnosticSink) -> CanonicalConfig {
    normalize_with(raw, &NormalizerOptions::default(), sink)
}

/// Normalize a raw configuration to canonical form.
///
/// Never fails. Schema violations (when `options.validate` is set) are
/// emitted as error diagnostics and the affected fields take their defaults.
pub fn normalize_with(
    raw: &RawConfig,
    options: &NormalizerOptions,
    sink: &mut dyn DiagnosticSink,
) -> CanonicalConfig {
    let mut violated: Vec<&'static str> = Vec::new();
    if options.validate {
        for violation in validate(raw).violations {
            violated.push(violation.field());
            sink.emit(Diagnostic::error(DiagnosticContext::Violation(violation)));
        }
    }

    let mut working = merge_defaults(raw);

    // ── Step 1: Children ───────────────────────────────
    let canonical_children = canonicalize_children(working.get(schema::CHILDREN));
    for rejected in &canonical_children.rejected {
        sink.emit(Diagnostic::warning(DiagnosticContext::InvalidChild {
            value: rejected.to_string(),
        }));
    }
    let children = canonical_children.children;
    log::debug!("normalize: {} children", children.len());

    // ── Step 2: Capabilities ───────────────────────────
    if options.check_children {
        check_capabilities(&children, sink);
    }

    // ── Step 3: Timing ─────────────────────────────────
    let mut timing_sink = SkipReported {
        inner: &mut *sink,
        fields: &violated,
    };
    let timing = coerce_all(|name| working.get(name), &mut timing_sink);
    log::debug!("normalize: timing {:?}", timing);

    // ── Step 4: Animation shapes ───────────────────────
    let enter_class_name = animation_generator(working.get(schema::ENTER_CLASS_NAME));
    let leave_class_name = animation_generator(working.get(schema::LEAVE_CLASS_NAME));

    // ── Step 5: Deprecation shim ───────────────────────
    apply_deprecation_shim(raw, &mut working, sink);

    // ── Step 6: Delegation ─────────────────────────────
    if raw.contains_key(DELEGATED) {
        sink.emit(Diagnostic::warning(DiagnosticContext::ReservedField {
            field: DELEGATED,
        }));
    }
    let delegated = delegate(raw);
    strip_delegated(&mut working, &delegated);
    log::debug!("normalize: {} delegated props", delegated.len());

    CanonicalConfig {
        children,
        easing: text_field(&working, schema::EASING),
        duration: timing.duration,
        delay: timing.delay,
        stagger_duration_by: timing.stagger_duration_by,
        stagger_delay_by: timing.stagger_delay_by,
        type_name: text_field(&working, schema::TYPE_NAME),
        enter_class_name,
        leave_class_name,
        disable_all_animations: bool_field(&working, DISABLE_ALL_ANIMATIONS),
        get_position: match working.get(schema::GET_POSITION) {
            Some(RawValue::Callback(cb)) => PositionGetter::Custom(cb.clone()),
            _ => PositionGetter::Platform,
        },
        maintain_container_height: bool_field(&working, schema::MAINTAIN_CONTAINER_HEIGHT),
        hooks: Hooks {
            on_start: callback_field(&working, schema::ON_START),
            on_finish: callback_field(&working, schema::ON_FINISH),
            on_start_all: callback_field(&working, schema::ON_START_ALL),
            on_finish_all: callback_field(&working, schema::ON_FINISH_ALL),
        },
        delegated,
    }
}

/// Validate first, then normalize.
///
/// # Errors
/// Returns `Error::Validation` carrying every violation if the raw
/// configuration does not satisfy the schema.
pub fn try_normalize(raw: &RawConfig, sink: &mut dyn DiagnosticSink) -> Result<CanonicalConfig> {
    let report = validate(raw);
    if !report.is_valid() {
        return Err(Error::Validation(report));
    }
    let options = NormalizerOptions {
        validate: false,
        ..NormalizerOptions::default()
    };
    Ok(normalize_with(raw, &options, sink))
}

// ── Pipeline steps ────────────────────────────────────────

/// `effective = defaults ⊕ provided`.
///
/// Caller order is kept; defaults for fields the caller did not provide
/// (absent or `null`) are filled in place or appended in schema order.
pub fn merge_defaults(raw: &RawConfig) -> RawMap {
    let mut working = raw.as_map().clone();
    for spec in SCHEMA {
        if raw.is_provided(spec.name) {
            continue;
        }
        match spec.default.to_raw() {
            Some(default) => {
                working.insert(spec.name.to_string(), default);
            }
            None => {
                working.shift_remove(spec.name);
            }
        }
    }
    working
}

fn animation_generator(value: Option<&RawValue>) -> ShapeGenerator {
    let descriptor = value
        .map(AnimationDescriptor::from_raw)
        .unwrap_or_default();
    ensure_callable(descriptor)
}

/// Move a legacy `disableAnimations` onto `disableAllAnimations`.
///
/// Presence is checked on the original input, so an explicit `false` or
/// `null` still triggers the shim. The legacy value is read by truthiness.
pub fn apply_deprecation_shim(
    raw: &RawConfig,
    working: &mut RawMap,
    sink: &mut dyn DiagnosticSink,
) -> bool {
    let Some(legacy) = raw.get(DISABLE_ANIMATIONS) else {
        return false;
    };
    sink.emit(Diagnostic::warning(DiagnosticContext::DeprecatedField {
        field: DISABLE_ANIMATIONS,
        replacement: DISABLE_ALL_ANIMATIONS,
    }));
    let value = legacy.is_truthy();
    working.shift_remove(DISABLE_ANIMATIONS);
    working.insert(DISABLE_ALL_ANIMATIONS.to_string(), RawValue::Bool(value));
    true
}

/// Drops timing warnings for fields the validation pass already reported
struct SkipReported<'a> {
    inner: &'a mut dyn DiagnosticSink,
    fields: &'a [&'static str],
}

impl DiagnosticSink for SkipReported<'_> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let reported = diagnostic.kind() == DiagnosticKind::InvalidTiming
            && self.fields.iter().any(|f| diagnostic.field() == Some(*f));
        if !reported {
            self.inner.emit(diagnostic);
        }
    }
}

fn text_field(working: &RawMap, name: &str) -> String {
    match working.get(name) {
        Some(RawValue::Text(s)) => s.clone(),
        _ => default_text(name),
    }
}

fn default_text(name: &str) -> String {
    match schema::field(name).map(|f| f.default) {
        Some(schema::FieldDefault::Text(s)) => s.to_string(),
        _ => String::new(),
    }
}

fn bool_field(working: &RawMap, name: &str) -> bool {
    working.get(name).and_then(RawValue::as_bool).unwrap_or(false)
}

fn callback_field(working: &RawMap, name: &str) -> Option<Callback> {
    working.get(name).and_then(RawValue::as_callback).cloned()
}

// ── Composed component ────────────────────────────────────

/// The component that consumes a canonical configuration
pub trait Composed {
    type Output;

    fn render(&self, config: CanonicalConfig) -> Self::Output;
}

impl<F, O> Composed for F
where
    F: Fn(CanonicalConfig) -> O,
{
    type Output = O;

    fn render(&self, config: CanonicalConfig) -> O {
        self(config)
    }
}

/// Wraps a composed component, normalizing its configuration on every render
#[derive(Debug, Clone)]
pub struct ConfigNormalizer<C> {
    inner: C,
    options: NormalizerOptions,
}

impl<C: Composed> ConfigNormalizer<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            options: NormalizerOptions::default(),
        }
    }

    pub fn with_options(inner: C, options: NormalizerOptions) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Normalize `raw` and hand the result to the composed component
    pub fn render(&self, raw: &RawConfig, sink: &mut dyn DiagnosticSink) -> C::Output {
        let config = normalize_with(raw, &self.options, sink);
        self.inner.render(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsExt;
    use crate::element::Element;
    use crate::shape::AnimationShape;

    fn base() -> RawConfig {
        RawConfig::new().with("maintainContainerHeight", false)
    }

    fn run(raw: &RawConfig) -> (CanonicalConfig, Vec<Diagnostic>) {
        let mut diags: Vec<Diagnostic> = Vec::new();
        let config = normalize(raw, &mut diags);
        (config, diags)
    }

    #[test]
    fn test_defaults_applied() {
        let (config, diags) = run(&base());
        assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
        assert!(config.children.is_empty());
        assert_eq!(config.easing, "ease-in-out");
        assert_eq!(config.duration, 350);
        assert_eq!(config.delay, 0);
        assert_eq!(config.stagger_duration_by, 0);
        assert_eq!(config.stagger_delay_by, 0);
        assert_eq!(config.type_name, "div");
        assert_eq!(config.enter_class_name.call(), AnimationDescriptor::default());
        assert_eq!(config.leave_class_name.call(), AnimationDescriptor::default());
        assert!(!config.disable_all_animations);
        assert_eq!(config.get_position, PositionGetter::Platform);
        assert!(!config.maintain_container_height);
        assert_eq!(config.hooks, Hooks::default());
        assert_eq!(config.delegated, Delegated::empty());
    }

    #[test]
    fn test_valid_timing_parsed() {
        let raw = base()
            .with("duration", "400")
            .with("delay", 25)
            .with("staggerDurationBy", "-5")
            .with("staggerDelayBy", 0);
        let (config, diags) = run(&raw);
        assert!(diags.is_empty());
        assert_eq!(
            (config.duration, config.delay, config.stagger_duration_by, config.stagger_delay_by),
            (400, 25, -5, 0)
        );
    }

    #[test]
    fn test_invalid_timing_one_diagnostic_per_field() {
        for field in schema::TIMING_FIELDS {
            for bad in [RawValue::from("abc"), RawValue::from(f64::NAN)] {
                let (config, diags) = run(&base().with(field, bad));
                let expected = schema::field(field).unwrap().default_integer().unwrap();
                let actual = match field {
                    "duration" => config.duration,
                    "delay" => config.delay,
                    "staggerDurationBy" => config.stagger_duration_by,
                    _ => config.stagger_delay_by,
                };
                assert_eq!(actual, expected, "{} should fall back", field);
                assert_eq!(diags.len(), 1);
                assert_eq!(diags[0].kind(), DiagnosticKind::InvalidTiming);
                assert_eq!(diags[0].field(), Some(field));
            }
        }
    }

    #[test]
    fn test_null_field_takes_default() {
        let (config, diags) = run(&base().with("duration", RawValue::Null));
        assert_eq!(config.duration, 350);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_single_child_and_absent_children() {
        let el = Element::host("li").with_key("a");
        let (config, _) = run(&base().with("children", el.clone()));
        assert_eq!(config.children, vec![Child::Element(el)]);

        let (config, _) = run(&base().with("children", RawValue::Null));
        assert!(config.children.is_empty());
    }

    #[test]
    fn test_invalid_children_reported_and_dropped() {
        let children = RawValue::List(vec![
            Element::stateless("Row").with_key("1").into(),
            RawValue::from(serde_json::json!({"color": "red"})),
        ]);
        let (config, diags) = run(&base().with("children", children));
        assert_eq!(config.children.len(), 1);
        assert_eq!(diags.of_kind(DiagnosticKind::InvalidChild).len(), 1);
        assert_eq!(diags.of_kind(DiagnosticKind::StatelessChild).len(), 1);
        assert!(diags.errors().is_empty());
    }

    #[test]
    fn test_capability_check_can_be_disabled() {
        let raw = base().with("children", Element::stateless("Row").with_key("1"));
        let options = NormalizerOptions {
            check_children: false,
            ..NormalizerOptions::default()
        };
        let mut diags: Vec<Diagnostic> = Vec::new();
        let config = normalize_with(&raw, &options, &mut diags);
        assert_eq!(config.children.len(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_shape_object_wrapped() {
        let shape = AnimationShape::new("a", "b");
        let (config, _) = run(&base().with("enterClassName", shape.to_raw()));
        assert_eq!(config.enter_class_name.call(), AnimationDescriptor::Shape(shape));
        assert!(!config.enter_class_name.is_dynamic());
    }

    #[test]
    fn test_callable_passes_through() {
        let cb = Callback::new(|_| RawValue::Bool(false));
        let (config, _) = run(&base().with("leaveClassName", cb.clone()));
        assert!(config.leave_class_name.callback().unwrap().ptr_eq(&cb));
        assert_eq!(config.leave_class_name.call(), AnimationDescriptor::Flag(false));
    }

    #[test]
    fn test_deprecated_field_shimmed() {
        let raw = base().with("disableAnimations", true);
        let (config, diags) = run(&raw);
        assert!(config.disable_all_animations);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), DiagnosticKind::DeprecatedField);
        assert!(!config.delegated.contains_key("disableAnimations"));
        assert!(config.to_json().get("disableAnimations").is_none());
    }

    #[test]
    fn test_deprecated_false_overrides_explicit_value() {
        let raw = base()
            .with("disableAllAnimations", true)
            .with("disableAnimations", false);
        let (config, diags) = run(&raw);
        assert!(!config.disable_all_animations);
        assert_eq!(diags.of_kind(DiagnosticKind::DeprecatedField).len(), 1);
    }

    #[test]
    fn test_deprecated_non_boolean_read_by_truthiness() {
        for (legacy, expected) in [
            (RawValue::from(1), true),
            (RawValue::from("true"), true),
            (RawValue::from("false"), true),
            (RawValue::from(0), false),
            (RawValue::from(""), false),
            (RawValue::Null, false),
        ] {
            let raw = base().with("disableAnimations", legacy.clone());
            let (config, diags) = run(&raw);
            assert_eq!(config.disable_all_animations, expected, "legacy value {}", legacy);
            assert_eq!(diags.of_kind(DiagnosticKind::DeprecatedField).len(), 1);
        }
    }

    #[test]
    fn test_absent_deprecated_field_no_action() {
        let (config, diags) = run(&base().with("disableAllAnimations", true));
        assert!(config.disable_all_animations);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_delegation_partitions_fields() {
        let raw = RawConfig::new()
            .with("foo", 1)
            .with("style", RawConfig::new().with("color", "red").into_map())
            .with("maintainContainerHeight", false);
        let (config, diags) = run(&raw);
        assert!(diags.is_empty());
        assert_eq!(
            config.delegated.to_json(),
            serde_json::json!({"foo": 1, "style": {"position": "relative", "color": "red"}})
        );
        let json = config.to_json();
        assert!(json.get("foo").is_none());
        assert!(json.get("style").is_none());
        let top: Vec<&String> = json.as_object().unwrap().keys().collect();
        for key in config.delegated.keys() {
            assert!(!top.iter().any(|k| k.as_str() == key));
        }
    }

    #[test]
    fn test_missing_required_reported_but_normalized() {
        let (config, diags) = run(&RawConfig::new());
        assert!(!config.maintain_container_height);
        assert_eq!(diags.errors().len(), 1);
        assert_eq!(diags[0].field(), Some("maintainContainerHeight"));
    }

    #[test]
    fn test_wrong_type_reported_and_defaulted() {
        let (config, diags) = run(&base().with("easing", 5).with("duration", true));
        assert_eq!(config.easing, "ease-in-out");
        assert_eq!(config.duration, 350);
        assert_eq!(diags.errors().len(), 2);
        let about_duration: Vec<_> = diags
            .iter()
            .filter(|d| d.field() == Some("duration"))
            .collect();
        assert_eq!(about_duration.len(), 1);
        assert_eq!(about_duration[0].kind(), DiagnosticKind::SchemaViolation);
        assert!(diags.of_kind(DiagnosticKind::InvalidTiming).is_empty());
    }

    #[test]
    fn test_wrong_type_timing_warns_when_validation_off() {
        let options = NormalizerOptions {
            validate: false,
            ..NormalizerOptions::default()
        };
        let mut diags: Vec<Diagnostic> = Vec::new();
        let config = normalize_with(&base().with("duration", true), &options, &mut diags);
        assert_eq!(config.duration, 350);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), DiagnosticKind::InvalidTiming);
    }

    #[test]
    fn test_reserved_delegated_key_dropped_with_warning() {
        let (config, diags) = run(&base().with("delegated", 5).with("id", "x"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), DiagnosticKind::ReservedField);
        assert_eq!(diags[0].field(), Some("delegated"));
        assert!(!config.delegated.contains_key("delegated"));
        assert!(config.delegated.contains_key("id"));
        let json = config.to_json();
        assert_eq!(json["delegated"]["id"], "x");
        assert!(json["delegated"].get("delegated").is_none());
    }

    #[test]
    fn test_try_normalize_rejects_violations() {
        let mut diags: Vec<Diagnostic> = Vec::new();
        let err = try_normalize(&RawConfig::new(), &mut diags).unwrap_err();
        match err {
            Error::Validation(report) => assert_eq!(report.missing_required().len(), 1),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(diags.is_empty());

        let config = try_normalize(&base().with("duration", "10"), &mut diags).unwrap();
        assert_eq!(config.duration, 10);
    }

    #[test]
    fn test_hooks_and_position_getter() {
        let hook = Callback::new(|_| RawValue::Null);
        let getter = Callback::new(|_| RawValue::Null);
        let raw = base()
            .with("onStart", hook.clone())
            .with("onFinishAll", hook.clone())
            .with("getPosition", getter.clone());
        let (config, diags) = run(&raw);
        assert!(diags.is_empty());
        assert_eq!(config.hooks.on_start, Some(hook.clone()));
        assert_eq!(config.hooks.on_finish_all, Some(hook));
        assert_eq!(config.hooks.on_finish, None);
        assert_eq!(config.get_position, PositionGetter::Custom(getter));
        assert_eq!(config.delegated, Delegated::empty());
    }

    #[test]
    fn test_renormalizing_canonical_fields_is_stable() {
        let raw = base()
            .with("children", vec![RawValue::from(Element::host("li").with_key("a")), "txt".into()])
            .with("duration", "120ms")
            .with("delay", 12.7)
            .with("easing", "linear")
            .with("enterClassName", AnimationShape::new("x", "y").to_raw())
            .with("leaveClassName", Callback::new(|_| RawValue::from("fade")))
            .with("disableAnimations", true)
            .with("onStart", Callback::new(|_| RawValue::Null));
        let (first, _) = run(&raw);
        let (second, diags) = run(&first.to_raw());
        assert!(diags.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_normalizer_hands_off_to_composed() {
        let wrapper = ConfigNormalizer::new(|config: CanonicalConfig| config.duration * 2);
        let mut diags: Vec<Diagnostic> = Vec::new();
        assert_eq!(wrapper.render(&base().with("duration", "50"), &mut diags), 100);
        assert!(wrapper.options().validate);
    }

    #[test]
    fn test_merge_defaults_keeps_caller_order() {
        let raw = RawConfig::new().with("id", "x").with("easing", RawValue::Null);
        let working = merge_defaults(&raw);
        let keys: Vec<&str> = working.keys().map(String::as_str).take(3).collect();
        assert_eq!(keys, vec!["id", "easing", "duration"]);
        assert_eq!(working.get("easing"), Some(&RawValue::from("ease-in-out")));
        assert!(!working.contains_key("getPosition"));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: NormalizerOptions = serde_json::from_str(r#"{"checkChildren": false}"#).unwrap();
        assert!(options.validate);
        assert!(!options.check_children);
    }
}
