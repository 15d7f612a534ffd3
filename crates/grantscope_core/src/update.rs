use chrono::{DateTime, Utc};

use crate::filter::compute_visible;
use crate::order::sort_by_urgency;
use crate::slug::{
    build_program_url, derive_slug, resolve_hash_target, site_copy_url, site_share_url,
};
use crate::view_model::{share_title, GUIDE_SHARE_TITLE};
use crate::{AppState, Effect, Msg, Record};

/// Pure update function: applies a message to state and returns any effects.
///
/// `now` is the injected reference timestamp; it is only consulted when a
/// message must resolve a slug against the currently rendered set.
pub fn update(mut state: AppState, msg: Msg, now: DateTime<Utc>) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RecordsLoaded(records) => {
            state.set_records(records);
            Vec::new()
        }
        Msg::LoadFailed(message) => {
            state.set_load_failed(message);
            Vec::new()
        }
        Msg::FilterRestored(filter) => {
            state.restore_filter(filter);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(&query);
            Vec::new()
        }
        Msg::ProducerToggled(tag) => {
            state.toggle_producer(tag);
            Vec::new()
        }
        Msg::CategoryToggled(tag) => {
            state.toggle_category(tag);
            Vec::new()
        }
        Msg::RollingOnlySet(on) => {
            state.set_rolling_only(on);
            Vec::new()
        }
        Msg::NoMatchOnlySet(on) => {
            state.set_no_match_only(on);
            Vec::new()
        }
        Msg::OpenNowSet(on) => {
            state.set_open_now(on);
            Vec::new()
        }
        Msg::DueSoonSet(on) => {
            state.set_due_soon(on);
            Vec::new()
        }
        Msg::PayoutSelected(payout) => {
            state.set_payout(payout);
            Vec::new()
        }
        Msg::ShareRequested { slug } => match find_rendered(&state, &slug, now) {
            Some(record) => vec![Effect::Share {
                title: share_title(&record.name),
                url: build_program_url(state.base_url(), &slug),
            }],
            None => Vec::new(),
        },
        Msg::CopyRequested { slug } => match find_rendered(&state, &slug, now) {
            Some(_) => vec![Effect::CopyToClipboard {
                text: build_program_url(state.base_url(), &slug),
            }],
            None => Vec::new(),
        },
        Msg::SiteShareRequested => vec![Effect::Share {
            title: GUIDE_SHARE_TITLE.to_string(),
            url: site_share_url(state.base_url()),
        }],
        Msg::SiteCopyRequested => vec![Effect::CopyToClipboard {
            text: site_copy_url(state.base_url()),
        }],
        Msg::HashChanged(hash) => match resolve_hash_target(&hash) {
            Some(slug) if find_rendered(&state, &slug, now).is_some() => {
                vec![Effect::ScrollTo { slug }]
            }
            _ => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Resolves a slug against the currently rendered sequence. On collisions
/// the last rendered card owns the identifier, so the search runs from the
/// end.
fn find_rendered<'a>(state: &'a AppState, slug: &str, now: DateTime<Utc>) -> Option<&'a Record> {
    if slug.is_empty() {
        return None;
    }
    let mut visible = compute_visible(state.records(), state.filter(), now);
    sort_by_urgency(&mut visible, now);
    visible
        .into_iter()
        .rev()
        .find(|record| derive_slug(&record.name) == slug)
}
