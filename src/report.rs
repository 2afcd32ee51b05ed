use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Duration;

use crate::domain::{format_duration, Segment, Session, Stage};

/// Partition sessions by segment. Only segments that actually occur in the
/// input get a bucket; together the buckets hold every input session once.
pub fn split_by_segment(sessions: &[Session]) -> BTreeMap<Segment, Vec<&Session>> {
    let mut buckets: BTreeMap<Segment, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        buckets.entry(session.segment).or_default().push(session);
    }
    buckets
}

/// Partition one segment's sessions by stage.
pub fn split_by_stage<'a>(sessions: &[&'a Session]) -> BTreeMap<Stage, Vec<&'a Session>> {
    let mut buckets: BTreeMap<Stage, Vec<&'a Session>> = BTreeMap::new();
    for session in sessions {
        buckets.entry(session.stage).or_default().push(session);
    }
    buckets
}

/// Total recorded duration over any set of sessions.
///
/// The empty set sums to a zero duration, so aggregation stays total and an
/// empty export still renders a report.
pub fn sum_durations<'a, I>(sessions: I) -> Duration
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .fold(Duration::zero(), |total, session| total + session.duration())
}

/// Render the end-of-day report: one block per segment with per-stage counts
/// in workflow order and the segment's summed duration.
pub fn render(sessions: &[Session]) -> String {
    let mut out = String::new();
    writeln!(out, "End of Day Report").unwrap();
    writeln!(out, "=================").unwrap();

    for (segment, segment_sessions) in split_by_segment(sessions) {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{}: {} sessions, {} recorded",
            segment,
            segment_sessions.len(),
            format_duration(sum_durations(segment_sessions.iter().copied()))
        )
        .unwrap();

        let by_stage = split_by_stage(&segment_sessions);
        for stage in Stage::ALL {
            if let Some(bucket) = by_stage.get(&stage) {
                writeln!(out, "  {:<20} {}", stage.as_str(), bucket.len()).unwrap();
            }
        }
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "Total: {} sessions, {} recorded",
        sessions.len(),
        format_duration(sum_durations(sessions))
    )
    .unwrap();

    out
}
