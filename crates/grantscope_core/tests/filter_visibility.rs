use std::sync::Once;

use chrono::{DateTime, Duration, Utc};
use grantscope_core::{compute_visible, FilterState, PayoutKind, Record};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(guide_logging::initialize_for_tests);
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-08-01T00:00:00Z")
        .expect("test timestamp")
        .with_timezone(&Utc)
}

fn sample_records() -> Vec<Record> {
    vec![
        Record {
            name: "Cover Crop Cost Share".to_string(),
            agency: Some("USDA NRCS".to_string()),
            categories: vec!["conservation".to_string(), "soil".to_string()],
            producer_types: vec!["farmer".to_string()],
            coverage_type: Some("cost_share_reimbursement".to_string()),
            rolling: true,
            what_it_covers: Some("Seed and planting costs for cover crops".to_string()),
            ..Record::default()
        },
        Record {
            name: "Drought Relief".to_string(),
            agency: Some("FSA".to_string()),
            categories: vec!["disaster".to_string()],
            producer_types: vec!["rancher".to_string()],
            coverage_type: Some("fixed_payment".to_string()),
            match_required: true,
            opens_at: Some(now() - Duration::days(10)),
            due_at: Some(now() + Duration::days(10)),
            ..Record::default()
        },
        Record {
            name: "Value-Added Producer Grant".to_string(),
            categories: vec!["marketing".to_string()],
            producer_types: vec!["farmer".to_string(), "rancher".to_string()],
            coverage_type: Some("grant".to_string()),
            opens_at: Some(now() - Duration::days(120)),
            due_at: Some(now() - Duration::days(60)),
            notes: Some("working capital and processing equipment".to_string()),
            ..Record::default()
        },
    ]
}

#[test]
fn empty_filter_keeps_every_record() {
    init_logging();
    let records = sample_records();
    let visible = compute_visible(&records, &FilterState::default(), now());
    assert_eq!(visible.len(), records.len());
}

#[test]
fn query_searches_name_agency_coverage_and_notes() {
    init_logging();
    let records = sample_records();

    let by_name = FilterState {
        query: "drought".to_string(),
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &by_name, now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Drought Relief");

    let by_agency = FilterState {
        query: "nrcs".to_string(),
        ..FilterState::default()
    };
    assert_eq!(compute_visible(&records, &by_agency, now()).len(), 1);

    let by_notes = FilterState {
        query: "working capital".to_string(),
        ..FilterState::default()
    };
    assert_eq!(compute_visible(&records, &by_notes, now()).len(), 1);

    let no_hit = FilterState {
        query: "greenhouse".to_string(),
        ..FilterState::default()
    };
    assert!(compute_visible(&records, &no_hit, now()).is_empty());
}

#[test]
fn tag_selections_intersect_record_tags() {
    init_logging();
    let records = sample_records();

    let ranchers = FilterState {
        producers: vec!["rancher".to_string()],
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &ranchers, now());
    assert_eq!(visible.len(), 2);

    let conservation = FilterState {
        categories: vec!["conservation".to_string()],
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &conservation, now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Cover Crop Cost Share");

    // Any selected tag is enough.
    let either = FilterState {
        categories: vec!["disaster".to_string(), "marketing".to_string()],
        ..FilterState::default()
    };
    assert_eq!(compute_visible(&records, &either, now()).len(), 2);
}

#[test]
fn rolling_only_and_no_match_only_toggles() {
    init_logging();
    let records = sample_records();

    let rolling = FilterState {
        rolling_only: true,
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &rolling, now());
    assert_eq!(visible.len(), 1);
    assert!(visible[0].rolling);

    let no_match = FilterState {
        no_match_only: true,
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &no_match, now());
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|record| !record.match_required));
}

#[test]
fn open_now_keeps_rolling_and_in_window_records() {
    init_logging();
    let records = sample_records();
    let open = FilterState {
        open_now: true,
        ..FilterState::default()
    };

    let visible = compute_visible(&records, &open, now());
    let names: Vec<&str> = visible.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Cover Crop Cost Share", "Drought Relief"]);
}

#[test]
fn due_soon_window_is_thirty_days_inclusive() {
    init_logging();
    let mut records = sample_records();
    records.push(Record {
        name: "Far Future".to_string(),
        due_at: Some(now() + Duration::days(45)),
        ..Record::default()
    });
    records.push(Record {
        name: "Just Missed".to_string(),
        due_at: Some(now() - Duration::days(1)),
        ..Record::default()
    });
    records.push(Record {
        name: "Coming Up".to_string(),
        due_at: Some(now() + Duration::days(29)),
        ..Record::default()
    });

    let due_soon = FilterState {
        due_soon: true,
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &due_soon, now());
    let names: Vec<&str> = visible.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Drought Relief", "Coming Up"]);
}

#[test]
fn payout_choice_filters_by_classification() {
    init_logging();
    let records = sample_records();

    let direct = FilterState {
        payout: Some(PayoutKind::Direct),
        ..FilterState::default()
    };
    let visible = compute_visible(&records, &direct, now());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Drought Relief");

    let reimbursement = FilterState {
        payout: Some(PayoutKind::Reimbursement),
        ..FilterState::default()
    };
    assert_eq!(compute_visible(&records, &reimbursement, now()).len(), 2);
}

#[test]
fn unclassified_records_never_match_a_payout_choice() {
    init_logging();
    let records = vec![Record {
        name: "Mystery".to_string(),
        coverage_type: Some("unusual".to_string()),
        ..Record::default()
    }];

    let direct = FilterState {
        payout: Some(PayoutKind::Direct),
        ..FilterState::default()
    };
    assert!(compute_visible(&records, &direct, now()).is_empty());
    assert_eq!(compute_visible(&records, &FilterState::default(), now()).len(), 1);
}

#[test]
fn all_clauses_combine_conjunctively() {
    init_logging();
    let records = sample_records();
    let combined = FilterState {
        query: "cover".to_string(),
        producers: vec!["farmer".to_string()],
        rolling_only: true,
        payout: Some(PayoutKind::Reimbursement),
        ..FilterState::default()
    };
    assert_eq!(compute_visible(&records, &combined, now()).len(), 1);

    let conflicting = FilterState {
        query: "cover".to_string(),
        payout: Some(PayoutKind::Direct),
        ..FilterState::default()
    };
    assert!(compute_visible(&records, &conflicting, now()).is_empty());
}
