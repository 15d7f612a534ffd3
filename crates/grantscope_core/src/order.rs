use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::predicate::is_open_now;
use crate::Record;

/// Sorts the visible set in place by urgency: open programs first, then
/// soonest due, then name. `sort_by` is stable, so records comparing equal
/// keep their input order.
pub fn sort_by_urgency(records: &mut [&Record], now: DateTime<Utc>) {
    records.sort_by(|a, b| urgency_cmp(a, b, now));
}

/// Total order over records.
///
/// Priority: open-now before closed; then ascending clamped time remaining
/// until the due date, with records lacking a due date last within their
/// tier; then case-folded name comparison as the final tie-break.
pub fn urgency_cmp(a: &Record, b: &Record, now: DateTime<Utc>) -> Ordering {
    let open = is_open_now(b, now).cmp(&is_open_now(a, now));
    if open != Ordering::Equal {
        return open;
    }

    let remaining = match (time_remaining(a, now), time_remaining(b, now)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    if remaining != Ordering::Equal {
        return remaining;
    }

    compare_names(&a.name, &b.name)
}

/// Time left until the due date, clamped at zero so every overdue record
/// shares one key. `None` when there is no due date (treated as infinite).
fn time_remaining(record: &Record, now: DateTime<Utc>) -> Option<Duration> {
    record.due_at.map(|due| (due - now).max(Duration::zero()))
}

/// Case-folded comparison standing in for a locale collation, with a raw
/// comparison breaking exact case-fold ties so the order stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        folded
    } else {
        a.cmp(b)
    }
}
