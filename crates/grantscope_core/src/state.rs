use chrono::{DateTime, Utc};

use crate::filter::{compute_visible, FilterState};
use crate::order::sort_by_urgency;
use crate::record::{unique_categories, unique_producer_types};
use crate::view_model::{card_view, count_summary, CardView, GuideViewModel};
use crate::{PayoutKind, Record};

/// Progress of the one-shot record load. Keeps "source failed to load"
/// distinguishable from a legitimately empty filter result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Failed(String),
    Ready,
}

/// Whole-session state: the immutable record collection, the load status,
/// the current filter snapshot and the shareable page base.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    records: Vec<Record>,
    load: LoadStatus,
    filter: FilterState,
    base_url: String,
    dirty: bool,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Recomputes the full view from scratch: filter, order, project.
    /// `now` is the reference timestamp for every time-based predicate.
    pub fn view(&self, now: DateTime<Utc>) -> GuideViewModel {
        let mut visible = compute_visible(&self.records, &self.filter, now);
        sort_by_urgency(&mut visible, now);
        let cards: Vec<CardView> = visible
            .iter()
            .map(|record| card_view(record, &self.base_url))
            .collect();
        GuideViewModel {
            load: self.load.clone(),
            count_summary: count_summary(cards.len()),
            cards,
            producer_options: unique_producer_types(&self.records),
            category_options: unique_categories(&self.records),
            dirty: self.dirty,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.load = LoadStatus::Ready;
        self.dirty = true;
    }

    pub(crate) fn set_load_failed(&mut self, message: String) {
        self.load = LoadStatus::Failed(message);
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        self.filter.query = query.trim().to_string();
        self.dirty = true;
    }

    pub(crate) fn toggle_producer(&mut self, tag: String) {
        toggle_tag(&mut self.filter.producers, tag);
        self.dirty = true;
    }

    pub(crate) fn toggle_category(&mut self, tag: String) {
        toggle_tag(&mut self.filter.categories, tag);
        self.dirty = true;
    }

    pub(crate) fn set_rolling_only(&mut self, on: bool) {
        self.filter.rolling_only = on;
        self.dirty = true;
    }

    pub(crate) fn set_no_match_only(&mut self, on: bool) {
        self.filter.no_match_only = on;
        self.dirty = true;
    }

    pub(crate) fn set_open_now(&mut self, on: bool) {
        self.filter.open_now = on;
        self.dirty = true;
    }

    pub(crate) fn set_due_soon(&mut self, on: bool) {
        self.filter.due_soon = on;
        self.dirty = true;
    }

    pub(crate) fn set_payout(&mut self, payout: Option<PayoutKind>) {
        self.filter.payout = payout;
        self.dirty = true;
    }

    pub(crate) fn restore_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.dirty = true;
    }
}

fn toggle_tag(selected: &mut Vec<String>, tag: String) {
    if let Some(index) = selected.iter().position(|candidate| *candidate == tag) {
        selected.remove(index);
    } else {
        selected.push(tag);
    }
}
