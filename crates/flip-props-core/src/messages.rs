//! Human-readable diagnostic text
//!
//! Pure functions from structured context to a message. Nothing here
//! decides severity or where the message goes.

use crate::validate::Violation;

const PREFIX: &str = "flip-props:";

/// Keyed stateless children were supplied.
pub fn stateless_children_supplied(names: &[String]) -> String {
    format!(
        "{} stateless component(s) supplied as animated children: {}. \
         Animated children need an instance reference and stateless components \
         have none. Wrap them in a host element (e.g. `div`) or a stateful component.",
        PREFIX,
        names.join(", ")
    )
}

/// A timing field could not be read as an integer.
pub fn invalid_timing_value(field: &str, value: &str, fallback: i64) -> String {
    format!(
        "{} invalid value for '{}': {}. Expected an integer or text that parses \
         as one. Falling back to the default of {}.",
        PREFIX, field, value, fallback
    )
}

/// The legacy `disableAnimations` field was used.
pub fn deprecated_field(field: &str, replacement: &str) -> String {
    format!(
        "{} '{}' is deprecated, use '{}' instead. Its value has been applied to '{}'.",
        PREFIX, field, replacement, replacement
    )
}

/// A preset name is not known to the registry.
pub fn invalid_preset(name: &str, acceptable: &[String], fallback: &str) -> String {
    format!(
        "{} unknown enter/leave preset '{}'. Acceptable values are: {}. \
         The '{}' preset will be used instead.",
        PREFIX,
        name,
        acceptable.join(", "),
        fallback
    )
}

/// A child entry that is neither an element nor text.
pub fn invalid_child(value: &str) -> String {
    format!(
        "{} ignoring child {}: children must be elements, text or numbers.",
        PREFIX, value
    )
}

/// A caller field collides with a name the canonical configuration reserves.
pub fn reserved_field(field: &str) -> String {
    format!(
        "{} '{}' is reserved and cannot be passed through. The value has been dropped.",
        PREFIX, field
    )
}

/// A schema violation found by the validation pass.
pub fn schema_violation(violation: &Violation) -> String {
    format!("{} {}", PREFIX, violation)
}
