//! Grantscope core: pure filter, ordering and view-model helpers.
mod effect;
mod filter;
mod msg;
mod order;
mod predicate;
mod record;
mod slug;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{compute_visible, FilterState, DUE_SOON_DAYS};
pub use msg::Msg;
pub use order::{sort_by_urgency, urgency_cmp};
pub use predicate::{
    classify_payout_kind, due_within_days, estimated_timeframe, is_open_now,
    needs_apply_before_work, payout_label, set_intersects, text_matches,
};
pub use record::{unique_categories, unique_producer_types, PayoutKind, Record};
pub use slug::{
    build_program_url, derive_slug, page_base, resolve_hash_target, site_copy_url, site_share_url,
};
pub use state::{AppState, LoadStatus};
pub use update::update;
pub use view_model::{
    card_view, count_summary, money, CardView, GuideViewModel, InfoAction, ELIGIBILITY_NOTE,
    GUIDE_SHARE_TITLE, LOCATOR_LINK, SEQUENCING_NOTE,
};
