use url::form_urlencoded;

use crate::predicate::{estimated_timeframe, needs_apply_before_work, payout_label};
use crate::slug::{build_program_url, derive_slug};
use crate::state::LoadStatus;
use crate::Record;

/// Fixed locator link offered on every card.
pub const LOCATOR_LINK: &str = "https://offices.sc.egov.usda.gov/locator/app";

/// Title used for page-level share actions.
pub const GUIDE_SHARE_TITLE: &str = "Ranch & Farm Grants – Free Guide";

/// Suffix appended to a program name for card-level share actions.
const SHARE_TITLE_SUFFIX: &str = " – Ranch & Farm Grants";

/// Fixed eligibility reminder rendered with every card.
pub const ELIGIBILITY_NOTE: &str = "Eligibility: current FSA Form 578, AD-1026, AGI within limits, \
    and no delinquent federal debts (taxes, student loans, USDA/SBA) or child-support arrears. \
    Don’t start work before approval.";

/// Fixed sequencing advice rendered with every card.
pub const SEQUENCING_NOTE: &str = "Smoothest path: apply for the grant first, then line up bridge \
    funding if needed. If you can’t complete, approval expires (no payment; advances may need to \
    be returned).";

/// Everything the front end needs to redraw from scratch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideViewModel {
    pub load: LoadStatus,
    /// `"<N> program(s) shown"` with correct pluralization.
    pub count_summary: String,
    /// Ordered, render-ready cards.
    pub cards: Vec<CardView>,
    /// Sorted tag lists for building the filter controls.
    pub producer_options: Vec<String>,
    pub category_options: Vec<String>,
    pub dirty: bool,
}

/// Primary info action on a card: the official page when the record carries
/// one, otherwise a constructed search-engine query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoAction {
    Official(String),
    Search(String),
}

/// Render-ready projection of one record. Pure data; the front end decides
/// how each field is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Display identifier for deep-link targeting. Collisions resolve to the
    /// last rendered card.
    pub slug: String,
    pub title: String,
    /// `"{agency} • {level}"`, either side blank when absent.
    pub meta_line: String,
    pub category_chips: Vec<String>,
    pub producer_chips: Vec<String>,
    /// `"rolling"`, `"window: {opens} → {due}"`, or nothing.
    pub window_chip: Option<String>,
    /// Cost-share and reimbursement programs pay only for approved work.
    pub apply_before_badge: bool,
    pub summary: String,
    pub decision_timeline: Option<String>,
    pub estimated_timeframe: &'static str,
    pub payout_line: String,
    pub max_award_line: String,
    pub required_docs: Option<String>,
    /// Semicolon-split list items.
    pub disqualifiers: Vec<String>,
    pub tips: Vec<String>,
    pub last_verified_line: String,
    pub info_action: InfoAction,
    pub locator_link: &'static str,
    pub apply_link: Option<String>,
    pub share_title: String,
    /// Deep link carried by both the share and the copy-link triggers.
    pub share_url: String,
}

/// Projects one record into its card. `base_url` is the shareable page base
/// used to build the deep link.
pub fn card_view(record: &Record, base_url: &str) -> CardView {
    let slug = derive_slug(&record.name);
    let share_url = build_program_url(base_url, &slug);

    let window_chip = if record.rolling {
        Some("rolling".to_string())
    } else {
        match (record.opens_at, record.due_at) {
            (Some(opens), Some(due)) => Some(format!(
                "window: {} → {}",
                opens.format("%Y-%m-%d"),
                due.format("%Y-%m-%d")
            )),
            _ => None,
        }
    };

    let payout_line = format!(
        "Payout: {} • Coverage: {} • Cost-share: {} • Match required: {} • Advance: {}",
        payout_label(record),
        record.coverage_type.as_deref().unwrap_or("—"),
        cost_share_range(record.cost_share_min, record.cost_share_max),
        yes_no(record.match_required),
        yes_no(record.advance_allowed),
    );

    let info_action = match record.official_link.as_deref() {
        Some(link) => InfoAction::Official(link.to_string()),
        None => InfoAction::Search(search_link(&record.name)),
    };

    CardView {
        title: record.name.clone(),
        meta_line: format!(
            "{} • {}",
            record.agency.as_deref().unwrap_or(""),
            record.level.as_deref().unwrap_or("")
        ),
        category_chips: record.categories.clone(),
        producer_chips: record.producer_types.clone(),
        window_chip,
        apply_before_badge: needs_apply_before_work(record),
        summary: record.what_it_covers.clone().unwrap_or_default(),
        decision_timeline: record.decision_timeline.clone(),
        estimated_timeframe: estimated_timeframe(record),
        payout_line,
        max_award_line: format!("Max award: {}", money(record.max_award)),
        required_docs: record.required_docs.clone(),
        disqualifiers: split_list(record.disqualifiers.as_deref()),
        tips: split_list(record.tax_notes.as_deref()),
        last_verified_line: format!(
            "Last verified: {}",
            record.last_verified.as_deref().unwrap_or("—")
        ),
        info_action,
        locator_link: LOCATOR_LINK,
        apply_link: record.apply_link.clone(),
        share_title: share_title(&record.name),
        share_url,
        slug,
    }
}

/// Human-readable title carried by a card's share trigger.
pub(crate) fn share_title(name: &str) -> String {
    format!("{name}{SHARE_TITLE_SUFFIX}")
}

/// `"<N> program(s) shown"` with correct pluralization for N=1.
pub fn count_summary(count: usize) -> String {
    format!(
        "{count} program{} shown",
        if count == 1 { "" } else { "s" }
    )
}

/// Whole-currency display: `"—"` when absent, otherwise `"$"` plus the
/// comma-grouped amount.
pub fn money(value: Option<u64>) -> String {
    match value {
        Some(amount) => format!("${}", group_thousands(amount)),
        None => "—".to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// `"{min}–{max}%"` with either bound optional; `"—"` when both are absent.
fn cost_share_range(min: Option<f64>, max: Option<f64>) -> String {
    if min.is_none() && max.is_none() {
        return "—".to_string();
    }
    let mut out = String::new();
    if let Some(min) = min {
        out.push_str(&percent(min));
        out.push('–');
    }
    if let Some(max) = max {
        out.push_str(&percent(max));
    }
    out.push('%');
    out
}

fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn split_list(text: Option<&str>) -> Vec<String> {
    text.unwrap_or("")
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn search_link(name: &str) -> String {
    let query: String =
        form_urlencoded::byte_serialize(format!("{} site:.gov", name.trim()).as_bytes()).collect();
    format!("https://www.google.com/search?q={query}")
}
