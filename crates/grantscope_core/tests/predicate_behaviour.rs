use std::sync::Once;

use chrono::{DateTime, Duration, Utc};
use grantscope_core::{
    classify_payout_kind, due_within_days, estimated_timeframe, is_open_now,
    needs_apply_before_work, payout_label, set_intersects, text_matches, PayoutKind, Record,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(guide_logging::initialize_for_tests);
}

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

fn covered(coverage: &str) -> Record {
    Record {
        name: "Sample".to_string(),
        coverage_type: Some(coverage.to_string()),
        ..Record::default()
    }
}

#[test]
fn cost_share_with_advance_reads_as_reimbursement_with_advance() {
    init_logging();
    let record = Record {
        name: "Cover Crop Cost Share".to_string(),
        coverage_type: Some("cost_share_reimbursement".to_string()),
        advance_allowed: true,
        ..Record::default()
    };

    assert_eq!(payout_label(&record), "reimbursement (advance possible)");
    assert_eq!(classify_payout_kind(&record), Some(PayoutKind::Reimbursement));
}

#[test]
fn fixed_payment_reads_as_direct_payment() {
    init_logging();
    let record = Record {
        name: "Drought Relief".to_string(),
        coverage_type: Some("fixed_payment".to_string()),
        ..Record::default()
    };

    assert_eq!(payout_label(&record), "direct payment");
    assert_eq!(classify_payout_kind(&record), Some(PayoutKind::Direct));
}

#[test]
fn bare_grant_reads_as_usually_reimbursement() {
    init_logging();
    let record = covered("grant");
    assert_eq!(payout_label(&record), "usually reimbursement");
    assert_eq!(classify_payout_kind(&record), Some(PayoutKind::Reimbursement));
}

#[test]
fn unclassified_coverage_reads_as_varies() {
    init_logging();
    let record = covered("mystery_mechanism");
    assert_eq!(payout_label(&record), "varies");
    assert_eq!(classify_payout_kind(&record), None);
    assert_eq!(estimated_timeframe(&record), "varies by program");

    let absent = Record {
        name: "No Coverage".to_string(),
        ..Record::default()
    };
    assert_eq!(payout_label(&absent), "varies");
    assert_eq!(classify_payout_kind(&absent), None);
}

#[test]
fn classification_ignores_case_and_everything_but_coverage() {
    init_logging();
    let mut record = covered("FIXED_PAYMENT plus extras");
    record.rolling = true;
    record.match_required = true;
    record.advance_allowed = true;
    assert_eq!(classify_payout_kind(&record), Some(PayoutKind::Direct));

    // fixed_payment wins even when a reimbursement keyword is also present.
    let mixed = covered("fixed_payment_or_cost_share");
    assert_eq!(classify_payout_kind(&mixed), Some(PayoutKind::Direct));
}

#[test]
fn timeframe_estimates_follow_the_classification_order() {
    init_logging();
    assert_eq!(
        estimated_timeframe(&covered("fixed_payment")),
        "often weeks–few months"
    );
    assert_eq!(
        estimated_timeframe(&covered("cost_share")),
        "plan for ~3–6 months; complex items can take 6–12 months"
    );
}

#[test]
fn apply_before_work_tracks_reimbursement_style_coverage() {
    init_logging();
    assert!(needs_apply_before_work(&covered("cost_share")));
    assert!(needs_apply_before_work(&covered("state_reimbursement")));
    assert!(!needs_apply_before_work(&covered("fixed_payment")));
    assert!(!needs_apply_before_work(&covered("grant")));
}

#[test]
fn rolling_records_are_always_open() {
    init_logging();
    let record = Record {
        name: "Rolling".to_string(),
        rolling: true,
        ..Record::default()
    };
    assert!(is_open_now(&record, ts("2026-08-01T00:00:00Z")));
}

#[test]
fn windowed_records_are_open_only_inside_the_window() {
    init_logging();
    let record = Record {
        name: "Windowed".to_string(),
        opens_at: Some(ts("2026-03-01T00:00:00Z")),
        due_at: Some(ts("2026-06-01T00:00:00Z")),
        ..Record::default()
    };

    assert!(!is_open_now(&record, ts("2026-02-28T00:00:00Z")));
    assert!(is_open_now(&record, ts("2026-03-01T00:00:00Z")));
    assert!(is_open_now(&record, ts("2026-04-15T12:00:00Z")));
    assert!(is_open_now(&record, ts("2026-06-01T00:00:00Z")));
    assert!(!is_open_now(&record, ts("2026-06-01T00:00:01Z")));
}

#[test]
fn incomplete_windows_are_never_open() {
    init_logging();
    let only_due = Record {
        name: "Half Window".to_string(),
        due_at: Some(ts("2026-06-01T00:00:00Z")),
        ..Record::default()
    };
    assert!(!is_open_now(&only_due, ts("2026-05-01T00:00:00Z")));

    let bare = Record {
        name: "No Window".to_string(),
        ..Record::default()
    };
    assert!(!is_open_now(&bare, ts("2026-05-01T00:00:00Z")));
}

#[test]
fn due_window_excludes_past_and_far_future() {
    init_logging();
    let now = ts("2026-08-01T00:00:00Z");
    let with_due = |offset: Duration| Record {
        name: "Due".to_string(),
        due_at: Some(now + offset),
        ..Record::default()
    };

    assert!(!due_within_days(&with_due(Duration::days(45)), now, 30));
    assert!(!due_within_days(&with_due(-Duration::days(1)), now, 30));
    assert!(due_within_days(&with_due(Duration::days(29)), now, 30));
    // Both boundaries are inclusive.
    assert!(due_within_days(&with_due(Duration::days(30)), now, 30));
    assert!(due_within_days(&with_due(Duration::zero()), now, 30));

    let no_due = Record {
        name: "No Due".to_string(),
        ..Record::default()
    };
    assert!(!due_within_days(&no_due, now, 30));
}

#[test]
fn text_match_is_case_insensitive_and_spans_fields() {
    init_logging();
    let fields = [
        Some("EQIP"),
        Some("USDA NRCS"),
        None,
        Some("irrigation upgrades"),
    ];

    assert!(text_matches(&fields, ""));
    assert!(text_matches(&fields, "nrcs"));
    assert!(text_matches(&fields, "Irrigation"));
    assert!(!text_matches(&fields, "greenhouse"));
}

#[test]
fn set_intersection_treats_empty_selection_as_no_filter() {
    init_logging();
    let tags = vec!["rancher".to_string(), "farmer".to_string()];

    assert!(set_intersects(&tags, &[]));
    assert!(set_intersects(&tags, &["farmer".to_string()]));
    assert!(!set_intersects(&tags, &["beekeeper".to_string()]));
    assert!(!set_intersects(&[], &["farmer".to_string()]));
}
