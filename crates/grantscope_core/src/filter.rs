use chrono::{DateTime, Utc};

use crate::predicate::{
    classify_payout_kind, due_within_days, is_open_now, set_intersects, text_matches,
};
use crate::{PayoutKind, Record};

/// Window for the "due soon" toggle, in days.
pub const DUE_SOON_DAYS: i64 = 30;

/// Immutable snapshot of the filter controls.
///
/// Rebuilt from the current control values on every change and passed by
/// value into [`compute_visible`]; the engine never reads control state
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text query, already trimmed.
    pub query: String,
    /// Selected producer-type tags; empty means no producer filter.
    pub producers: Vec<String>,
    /// Selected category tags; empty means no category filter.
    pub categories: Vec<String>,
    pub rolling_only: bool,
    pub no_match_only: bool,
    pub open_now: bool,
    /// Due within [`DUE_SOON_DAYS`] days.
    pub due_soon: bool,
    /// Mutually exclusive payout choice; `None` means no payout filter.
    pub payout: Option<PayoutKind>,
}

/// Returns every record matching all active filter clauses, in input order.
/// Ordering of the result is a separate concern (see `sort_by_urgency`).
pub fn compute_visible<'a>(
    records: &'a [Record],
    filter: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches_filter(record, filter, now))
        .collect()
}

fn matches_filter(record: &Record, filter: &FilterState, now: DateTime<Utc>) -> bool {
    let searched = [
        Some(record.name.as_str()),
        record.agency.as_deref(),
        record.what_it_covers.as_deref(),
        record.notes.as_deref(),
    ];
    if !text_matches(&searched, &filter.query) {
        return false;
    }
    if !set_intersects(&record.producer_types, &filter.producers) {
        return false;
    }
    if !set_intersects(&record.categories, &filter.categories) {
        return false;
    }
    if filter.rolling_only && !record.rolling {
        return false;
    }
    if filter.no_match_only && record.match_required {
        return false;
    }
    if filter.open_now && !is_open_now(record, now) {
        return false;
    }
    if filter.due_soon && !due_within_days(record, now, DUE_SOON_DAYS) {
        return false;
    }
    if let Some(wanted) = filter.payout {
        if classify_payout_kind(record) != Some(wanted) {
            return false;
        }
    }
    true
}
