use chrono::{DateTime, Utc};

/// One assistance-program entry as supplied by the external loader.
///
/// Records are immutable after load; the core never mutates one. Every
/// optional field stays optional all the way through the pipeline, and the
/// predicates treat an absent field as non-matching rather than failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Display title and slug source. Non-empty after load-boundary
    /// normalization.
    pub name: String,
    pub agency: Option<String>,
    pub level: Option<String>,
    /// Tag order is irrelevant for filtering but preserved for display.
    pub categories: Vec<String>,
    pub producer_types: Vec<String>,
    /// Free-text classifier; drives the derived payout classification via
    /// ordered substring rules.
    pub coverage_type: Option<String>,
    pub match_required: bool,
    pub advance_allowed: bool,
    /// A rolling program has no fixed window and is always open.
    pub rolling: bool,
    /// Application window start. Only meaningful together with `due_at`.
    pub opens_at: Option<DateTime<Utc>>,
    pub due_at: Option<DateTime<Utc>>,
    pub decision_timeline: Option<String>,
    /// Whole currency units.
    pub max_award: Option<u64>,
    pub cost_share_min: Option<f64>,
    pub cost_share_max: Option<f64>,
    pub required_docs: Option<String>,
    /// Semicolon-delimited list.
    pub disqualifiers: Option<String>,
    /// Semicolon-delimited list.
    pub tax_notes: Option<String>,
    pub what_it_covers: Option<String>,
    pub notes: Option<String>,
    pub official_link: Option<String>,
    pub apply_link: Option<String>,
    /// Display-only date string.
    pub last_verified: Option<String>,
}

/// Derived payout classification. Records whose coverage type matches none
/// of the classification rules stay unclassified (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutKind {
    Direct,
    Reimbursement,
}

impl PayoutKind {
    /// Stable identifier used by filter controls and persisted state.
    pub fn as_str(self) -> &'static str {
        match self {
            PayoutKind::Direct => "direct",
            PayoutKind::Reimbursement => "reimbursement",
        }
    }

    /// Inverse of [`PayoutKind::as_str`]. Unknown values clear the choice.
    pub fn parse(value: &str) -> Option<PayoutKind> {
        match value {
            "direct" => Some(PayoutKind::Direct),
            "reimbursement" => Some(PayoutKind::Reimbursement),
            _ => None,
        }
    }
}

/// Sorted, deduplicated producer-type tags across the whole collection.
/// Used to build the producer filter controls.
pub fn unique_producer_types(records: &[Record]) -> Vec<String> {
    unique_sorted(
        records
            .iter()
            .flat_map(|record| record.producer_types.iter().map(String::as_str)),
    )
}

/// Sorted, deduplicated category tags across the whole collection.
pub fn unique_categories(records: &[Record]) -> Vec<String> {
    unique_sorted(
        records
            .iter()
            .flat_map(|record| record.categories.iter().map(String::as_str)),
    )
}

fn unique_sorted<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = tags
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    out.sort();
    out.dedup();
    out
}
