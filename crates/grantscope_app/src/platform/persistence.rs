use std::fs;
use std::path::Path;

use grantscope_core::{FilterState, PayoutKind};
use guide_logging::{guide_error, guide_info, guide_warn};
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".grantscope_state.ron";

/// Serialized mirror of the core filter snapshot. Kept separate from the
/// core type so the wire shape can evolve independently.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedFilter {
    query: String,
    producers: Vec<String>,
    categories: Vec<String>,
    rolling_only: bool,
    no_match_only: bool,
    open_now: bool,
    due_soon: bool,
    payout: Option<String>,
}

pub(crate) fn load_filter_state(dir: &Path) -> Option<FilterState> {
    let path = dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            guide_warn!("Failed to read persisted filters from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedFilter = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            guide_warn!("Failed to parse persisted filters from {:?}: {}", path, err);
            return None;
        }
    };

    guide_info!("Restored filter state from {:?}", path);
    Some(FilterState {
        query: persisted.query,
        producers: persisted.producers,
        categories: persisted.categories,
        rolling_only: persisted.rolling_only,
        no_match_only: persisted.no_match_only,
        open_now: persisted.open_now,
        due_soon: persisted.due_soon,
        payout: persisted.payout.as_deref().and_then(PayoutKind::parse),
    })
}

pub(crate) fn save_filter_state(dir: &Path, filter: &FilterState) {
    let persisted = PersistedFilter {
        query: filter.query.clone(),
        producers: filter.producers.clone(),
        categories: filter.categories.clone(),
        rolling_only: filter.rolling_only,
        no_match_only: filter.no_match_only,
        open_now: filter.open_now,
        due_soon: filter.due_soon,
        payout: filter.payout.map(|kind| kind.as_str().to_string()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            guide_error!("Failed to serialize persisted filters: {}", err);
            return;
        }
    };

    let path = dir.join(STATE_FILENAME);
    if let Err(err) = fs::write(&path, content) {
        guide_error!("Failed to write persisted filters to {:?}: {}", path, err);
    }
}
