use serde::{Deserialize, Serialize};
use skyroute_core::RecentSearch;

pub const MAX_RECENT: usize = 5;

/// Most-recent-first history of submitted routes, deduplicated by
/// origin/destination pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSearches {
    entries: Vec<RecentSearch>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize { MAX_RECENT }

impl RecentSearches {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    pub fn add(&mut self, search: RecentSearch) {
        self.entries.retain(|s| !s.same_route(&search));
        self.entries.insert(0, search);
        self.entries.truncate(self.limit);
    }

    pub fn entries(&self) -> &[RecentSearch] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(MAX_RECENT)
    }
}
