use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Value;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:\d+:\d+$").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Classify one raw field into its semantic type.
///
/// Rules are ordered and the first match wins: `h:m:s` durations, then bare
/// integers, then case-insensitive yes/no booleans; anything else stays a
/// string. Fields are classified independently and never partially matched.
pub fn coerce_field(raw: &str) -> Value {
    if DURATION_RE.is_match(raw) {
        let mut parts = raw.split(':').map(|p| p.parse::<i64>().unwrap_or(0));
        let hours = parts.next().unwrap_or(0);
        let minutes = parts.next().unwrap_or(0);
        let seconds = parts.next().unwrap_or(0);
        return Value::Duration(
            Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds),
        );
    }
    if INTEGER_RE.is_match(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
    }
    if raw.eq_ignore_ascii_case("yes") {
        return Value::Bool(true);
    }
    if raw.eq_ignore_ascii_case("no") {
        return Value::Bool(false);
    }
    Value::Str(raw.to_string())
}

/// Coerce every field of a raw row.
pub fn coerce_row(row: &[String]) -> Vec<Value> {
    row.iter().map(|field| coerce_field(field)).collect()
}
