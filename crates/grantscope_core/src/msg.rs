use crate::{FilterState, PayoutKind, Record};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Loader finished with the complete record collection.
    RecordsLoaded(Vec<Record>),
    /// Loader failed; surfaced as a distinct error state, never as an
    /// empty result.
    LoadFailed(String),
    /// Restore a previously persisted filter snapshot.
    FilterRestored(FilterState),
    /// Search box text changed.
    QueryChanged(String),
    /// A producer-type checkbox was flipped.
    ProducerToggled(String),
    /// A category checkbox was flipped.
    CategoryToggled(String),
    RollingOnlySet(bool),
    NoMatchOnlySet(bool),
    OpenNowSet(bool),
    DueSoonSet(bool),
    /// Payout radio selection; `None` clears the choice.
    PayoutSelected(Option<PayoutKind>),
    /// Share trigger on a rendered card.
    ShareRequested { slug: String },
    /// Copy-link trigger on a rendered card.
    CopyRequested { slug: String },
    /// Page-level share button.
    SiteShareRequested,
    /// Page-level copy button.
    SiteCopyRequested,
    /// The location hash changed (deep-link navigation).
    HashChanged(String),
    /// Fallback for placeholder wiring.
    NoOp,
}
