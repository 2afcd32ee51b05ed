use std::collections::BTreeMap;
use std::fmt;

use chrono::Duration;

use crate::error::{ReportError, Result};

/// A typed field value produced by the coercion step.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Duration(Duration),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Duration(d) => write!(f, "{}", format_duration(*d)),
            Value::Bool(true) => write!(f, "yes"),
            Value::Bool(false) => write!(f, "no"),
        }
    }
}

/// Render a duration as `h:mm:ss`, the same shape the export uses.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Customer category derived from the customer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    B2b,
    B2c,
    Spanish,
    Srt,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::B2b => "b2b",
            Segment::B2c => "b2c",
            Segment::Spanish => "spanish",
            Segment::Srt => "srt",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position of a session in the transcription workflow, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Transcribing,
    ReadyForQa,
    QaInProgress,
    ReadyForReview,
    ReviewInProgress,
    Completed,
}

impl Stage {
    /// All stages in workflow order, for stable report output.
    pub const ALL: [Stage; 6] = [
        Stage::Transcribing,
        Stage::ReadyForQa,
        Stage::QaInProgress,
        Stage::ReadyForReview,
        Stage::ReviewInProgress,
        Stage::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Transcribing => "transcribing",
            Stage::ReadyForQa => "ready_for_qa",
            Stage::QaInProgress => "qa_in_progress",
            Stage::ReadyForReview => "ready_for_review",
            Stage::ReviewInProgress => "review_in_progress",
            Stage::Completed => "completed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One typed row of the export, keyed by normalized header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, value: Value) {
        self.fields.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Fetch a string field, failing with a schema error if it is missing
    /// or carries a different type.
    pub fn require_str(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ReportError::Schema(format!("missing expected field '{}'", name)))?
            .as_str()
            .ok_or_else(|| ReportError::Schema(format!("field '{}' is not a string", name)))
    }

    /// Fetch a boolean field, failing with a schema error if it is missing
    /// or carries a different type.
    pub fn require_bool(&self, name: &str) -> Result<bool> {
        self.get(name)
            .ok_or_else(|| ReportError::Schema(format!("missing expected field '{}'", name)))?
            .as_bool()
            .ok_or_else(|| ReportError::Schema(format!("field '{}' is not a boolean", name)))
    }
}

/// One classified transcription session: the typed record plus the two
/// derived fields. `segment` and `stage` are computed, never read from
/// the source data.
#[derive(Debug, Clone)]
pub struct Session {
    pub record: Record,
    pub segment: Segment,
    pub stage: Stage,
}

impl Session {
    /// The session's recorded duration, or zero when the duration field
    /// did not coerce to a duration.
    pub fn duration(&self) -> Duration {
        self.record
            .get("duration")
            .and_then(Value::as_duration)
            .unwrap_or_else(Duration::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(0)), "0:00:00");
        assert_eq!(
            format_duration(Duration::hours(5) + Duration::minutes(3) + Duration::seconds(9)),
            "5:03:09"
        );
        assert_eq!(format_duration(Duration::hours(27)), "27:00:00");
    }

    #[test]
    fn test_require_str_reports_missing_field() {
        let record = Record::new();
        let err = record.require_str("customer").unwrap_err();
        assert!(err.to_string().contains("customer"));
    }

    #[test]
    fn test_require_bool_rejects_wrong_type() {
        let mut record = Record::new();
        record.insert("is_finished?".to_string(), Value::Str("yes please".to_string()));
        assert!(record.require_bool("is_finished?").is_err());
    }

    #[test]
    fn test_stage_order_matches_workflow() {
        assert!(Stage::Transcribing < Stage::ReadyForQa);
        assert!(Stage::ReviewInProgress < Stage::Completed);
    }
}
