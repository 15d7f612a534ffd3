use chrono::{DateTime, Duration, Utc};

use crate::{PayoutKind, Record};

/// Case-folded substring match over a set of text-bearing fields.
/// An empty needle matches everything; absent fields contribute nothing.
pub fn text_matches(fields: &[Option<&str>], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = fields
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    haystack.contains(&needle.to_lowercase())
}

/// True when no tags are selected, or when any selected tag appears on the
/// record.
pub fn set_intersects(record_tags: &[String], selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected
        .iter()
        .any(|tag| record_tags.iter().any(|candidate| candidate == tag))
}

/// Whether the program is accepting applications at `now`.
///
/// Rolling programs are always open. Otherwise a record is open only inside a
/// complete window; a record with neither a rolling flag nor a complete
/// window is never open. That is policy, not a fallback.
pub fn is_open_now(record: &Record, now: DateTime<Utc>) -> bool {
    if record.rolling {
        return true;
    }
    match (record.opens_at, record.due_at) {
        (Some(opens), Some(due)) => opens <= now && now <= due,
        _ => false,
    }
}

/// True when the due date exists and lies within the next `days` days.
/// A due date in the past is excluded.
pub fn due_within_days(record: &Record, now: DateTime<Utc>, days: i64) -> bool {
    let Some(due) = record.due_at else {
        return false;
    };
    let remaining = due - now;
    remaining >= Duration::zero() && remaining <= Duration::days(days)
}

/// Ordered substring classification of the coverage type. First matching
/// rule wins: `fixed_payment` maps to direct payment, then any of
/// `cost_share` / `reimbursement` / `grant` maps to reimbursement.
pub fn classify_payout_kind(record: &Record) -> Option<PayoutKind> {
    let coverage = folded_coverage(record);
    if coverage.contains("fixed_payment") {
        return Some(PayoutKind::Direct);
    }
    if ["cost_share", "reimbursement", "grant"]
        .iter()
        .any(|needle| coverage.contains(needle))
    {
        return Some(PayoutKind::Reimbursement);
    }
    None
}

/// Display-oriented payout description. Unlike [`classify_payout_kind`] the
/// reimbursement rule is checked first and layers `advance_allowed` on top.
pub fn payout_label(record: &Record) -> &'static str {
    let coverage = folded_coverage(record);
    if coverage.contains("cost_share") || coverage.contains("reimbursement") {
        if record.advance_allowed {
            "reimbursement (advance possible)"
        } else {
            "reimbursement"
        }
    } else if coverage.contains("fixed_payment") {
        "direct payment"
    } else if coverage.contains("grant") {
        "usually reimbursement"
    } else {
        "varies"
    }
}

/// Coarse planning estimate keyed by the same rule order as
/// [`classify_payout_kind`]. Advisory only; never used for filtering or
/// ordering.
pub fn estimated_timeframe(record: &Record) -> &'static str {
    let coverage = folded_coverage(record);
    if coverage.contains("fixed_payment") {
        return "often weeks–few months";
    }
    if ["cost_share", "reimbursement", "grant"]
        .iter()
        .any(|needle| coverage.contains(needle))
    {
        return "plan for ~3–6 months; complex items can take 6–12 months";
    }
    "varies by program"
}

/// Cost-share and reimbursement programs pay after approved work; starting
/// early forfeits the award.
pub fn needs_apply_before_work(record: &Record) -> bool {
    let coverage = folded_coverage(record);
    coverage.contains("cost_share") || coverage.contains("reimbursement")
}

fn folded_coverage(record: &Record) -> String {
    record
        .coverage_type
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
}
