//! Timing coercer — duration/delay/stagger fields to integers
//!
//! Text is parsed as a base-10 integer prefix; numbers are truncated toward
//! zero. Anything that does not yield a representable integer falls back to
//! the field's own schema default with a diagnostic. No range clamping:
//! zero and negative values are kept as supplied.

use crate::diagnostics::{Diagnostic, DiagnosticContext, DiagnosticSink};
use crate::schema;
use crate::value::RawValue;

/// Parse the integer prefix of `text` in base 10.
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit. Returns `None` when there are no digits or the value does not
/// fit in an `i64`.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let d = i64::from(b - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }
    Some(value)
}

/// Integer reading of a raw timing value, or `None` if it is not a number
pub fn to_integer(value: &RawValue) -> Option<i64> {
    match value {
        RawValue::Text(s) => parse_int(s),
        RawValue::Number(n) if n.is_finite() => {
            let t = n.trunc();
            if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                Some(t as i64)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Coerce one timing field, falling back to its schema default.
///
/// `value` is the effective (already defaulted) value; `None` means the
/// field has no value at all and yields the default silently.
pub fn coerce_timing(
    field: &'static str,
    value: Option<&RawValue>,
    sink: &mut dyn DiagnosticSink,
) -> i64 {
    let fallback = schema::field(field)
        .and_then(|f| f.default_integer())
        .unwrap_or(0);
    let Some(value) = value else {
        return fallback;
    };
    match to_integer(value) {
        Some(n) => n,
        None => {
            log::debug!("timing field '{}' not a number: {}", field, value);
            sink.emit(Diagnostic::warning(DiagnosticContext::InvalidTiming {
                field,
                value: value.to_string(),
                fallback,
            }));
            fallback
        }
    }
}

/// The four coerced timing values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: i64,
    pub delay: i64,
    pub stagger_duration_by: i64,
    pub stagger_delay_by: i64,
}

/// Coerce all four timing fields. Each field recovers independently.
pub fn coerce_all<'a, F>(lookup: F, sink: &mut dyn DiagnosticSink) -> Timing
where
    F: Fn(&str) -> Option<&'a RawValue>,
{
    Timing {
        duration: coerce_timing(schema::DURATION, lookup(schema::DURATION), sink),
        delay: coerce_timing(schema::DELAY, lookup(schema::DELAY), sink),
        stagger_duration_by: coerce_timing(
            schema::STAGGER_DURATION_BY,
            lookup(schema::STAGGER_DURATION_BY),
            sink,
        ),
        stagger_delay_by: coerce_timing(
            schema::STAGGER_DELAY_BY,
            lookup(schema::STAGGER_DELAY_BY),
            sink,
        ),
    }
}
