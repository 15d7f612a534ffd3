use chrono::{DateTime, NaiveDate, Utc};
use grantscope_core::Record;
use serde::Deserialize;

/// Placeholder display name for records that arrive without one.
const NAME_PLACEHOLDER: &str = "program";

/// One record as it appears on the wire.
///
/// Every field is optional and loosely typed; the conversion to [`Record`]
/// applies defaults and parses timestamps, so the predicates never see
/// wire-level looseness.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub program_name: Option<String>,
    pub agency: Option<String>,
    pub level: Option<String>,
    pub categories: Vec<String>,
    pub producer_types: Vec<String>,
    pub coverage_type: Option<String>,
    pub match_required: bool,
    pub advance_allowed: bool,
    pub rolling: bool,
    pub opens_at: Option<String>,
    pub due_at: Option<String>,
    pub decision_timeline: Option<String>,
    pub max_award: Option<f64>,
    pub cost_share_min: Option<f64>,
    pub cost_share_max: Option<f64>,
    pub required_docs: Option<String>,
    pub disqualifiers: Option<String>,
    pub tax_notes: Option<String>,
    pub what_it_covers: Option<String>,
    pub notes: Option<String>,
    pub official_link: Option<String>,
    pub apply_link: Option<String>,
    pub last_verified: Option<String>,
}

impl RawRecord {
    /// Load-boundary normalization into the fixed-shape model. A blank or
    /// missing name falls back to the placeholder so the slug source is
    /// always non-empty.
    pub fn into_record(self) -> Record {
        let name = self
            .program_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());

        Record {
            name,
            agency: self.agency,
            level: self.level,
            categories: self.categories,
            producer_types: self.producer_types,
            coverage_type: self.coverage_type,
            match_required: self.match_required,
            advance_allowed: self.advance_allowed,
            rolling: self.rolling,
            opens_at: self.opens_at.as_deref().and_then(parse_when),
            due_at: self.due_at.as_deref().and_then(parse_when),
            decision_timeline: self.decision_timeline,
            max_award: self.max_award.map(|value| value.max(0.0).round() as u64),
            cost_share_min: self.cost_share_min,
            cost_share_max: self.cost_share_max,
            required_docs: self.required_docs,
            disqualifiers: self.disqualifiers,
            tax_notes: self.tax_notes,
            what_it_covers: self.what_it_covers,
            notes: self.notes,
            official_link: self.official_link,
            apply_link: self.apply_link,
            last_verified: self.last_verified,
        }
    }
}

/// Lenient timestamp parsing: RFC 3339 first, then a bare calendar date
/// taken as midnight UTC. Anything else is treated as absent.
pub fn parse_when(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}
