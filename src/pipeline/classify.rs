use crate::domain::{Record, Segment, Session, Stage};
use crate::error::Result;

/// Field names the classifier reads. The record shape is assumed uniform,
/// so a missing field is a fatal schema error, not a skippable row.
const CUSTOMER: &str = "customer";
const IS_FINISHED: &str = "is_finished?";
const QA: &str = "qa";
const REVIEW: &str = "review";

/// Derive the segment and stage for one record and attach them.
pub fn classify(record: Record) -> Result<Session> {
    let segment = segment_of(record.require_str(CUSTOMER)?);
    let stage = stage_of(
        record.require_bool(IS_FINISHED)?,
        record.require_str(QA)?,
        record.require_str(REVIEW)?,
    );
    Ok(Session {
        record,
        segment,
        stage,
    })
}

/// Customer segment, from the email-domain pattern of the customer field.
/// Substring checks are case-sensitive, matching the upstream rule.
fn segment_of(customer: &str) -> Segment {
    if !customer.contains("@transcribeme.com") {
        Segment::B2c
    } else if customer.contains("srt") {
        Segment::Srt
    } else if customer.contains("spanish") {
        Segment::Spanish
    } else {
        Segment::B2b
    }
}

/// Workflow stage, as an ordered decision chain: the first satisfied branch
/// wins. The QA and review fields are either empty or carry status markers
/// such as "Expires 01/02" or "Submitted 01/02".
fn stage_of(finished: bool, qa: &str, review: &str) -> Stage {
    if !finished {
        Stage::Transcribing
    } else if qa.is_empty() {
        Stage::ReadyForQa
    } else if qa.contains("Expires") {
        Stage::QaInProgress
    } else if review.is_empty() {
        Stage::ReadyForReview
    } else if review.contains("Expires") {
        Stage::ReviewInProgress
    } else {
        Stage::Completed
    }
}
