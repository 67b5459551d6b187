//! In-memory stores for development and tests.
//!
//! Seedable implementations of the upstream contracts with interior
//! mutability, so fixtures can mutate the backing data between calls, and
//! fetch counters, so tests can assert how often the engine actually went
//! upstream.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use tastebuds_core::lineage::LineageInfo;
use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;

use super::{AvailabilityLookup, DraftMenu, MenuStore, StoreError};

/// In-memory menu store keyed by slug and draft token.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    state: RwLock<StoreState>,
    slug_fetches: AtomicUsize,
    token_fetches: AtomicUsize,
}

#[derive(Debug, Default)]
struct StoreState {
    menus: HashMap<String, Menu>,
    drafts: HashMap<String, DraftMenu>,
    lineage: HashMap<String, LineageInfo>,
}

impl InMemoryMenuStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a menu, keyed by its slug.
    pub fn insert_menu(&self, menu: Menu) {
        self.state.write().menus.insert(menu.slug.clone(), menu);
    }

    /// Removes a menu, simulating deletion from under a live resolution.
    pub fn remove_menu(&self, slug: &str) {
        self.state.write().menus.remove(slug);
    }

    /// Registers a draft token resolving to the given menu snapshot.
    pub fn insert_draft(&self, token: impl Into<String>, draft: DraftMenu) {
        self.state.write().drafts.insert(token.into(), draft);
    }

    /// Records lineage for a public slug.
    pub fn insert_lineage(&self, slug: impl Into<String>, lineage: LineageInfo) {
        self.state.write().lineage.insert(slug.into(), lineage);
    }

    /// Number of slug fetches served so far.
    pub fn slug_fetch_count(&self) -> usize {
        self.slug_fetches.load(Ordering::SeqCst)
    }

    /// Number of draft-token fetches served so far.
    pub fn token_fetch_count(&self) -> usize {
        self.token_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn menu_by_slug(&self, slug: &str) -> Result<Menu, StoreError> {
        self.slug_fetches.fetch_add(1, Ordering::SeqCst);
        self.state
            .read()
            .menus
            .get(slug)
            .filter(|menu| menu.is_public)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                reason: format!("menu not found for slug '{slug}'"),
            })
    }

    async fn draft_menu_by_token(&self, token: &str) -> Result<DraftMenu, StoreError> {
        self.token_fetches.fetch_add(1, Ordering::SeqCst);
        self.state
            .read()
            .drafts
            .get(token)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                reason: "draft link unknown".to_string(),
            })
    }

    async fn menu_lineage(&self, slug: &str) -> Result<LineageInfo, StoreError> {
        self.state
            .read()
            .lineage
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                reason: format!("no lineage recorded for '{slug}'"),
            })
    }
}

/// In-memory availability service recording every batch it serves.
#[derive(Debug, Default)]
pub struct InMemoryAvailability {
    summaries: RwLock<HashMap<MediaItemId, AvailabilitySummary>>,
    unsolicited: RwLock<Vec<AvailabilitySummary>>,
    requests: RwLock<Vec<Vec<MediaItemId>>>,
}

impl InMemoryAvailability {
    /// Creates an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a summary served when its media item is requested.
    pub fn insert(&self, summary: AvailabilitySummary) {
        self.summaries
            .write()
            .insert(summary.media_item_id.clone(), summary);
    }

    /// Registers a summary appended to every response regardless of the
    /// request set, simulating an over-sharing upstream.
    pub fn insert_unsolicited(&self, summary: AvailabilitySummary) {
        self.unsolicited.write().push(summary);
    }

    /// Number of batch lookups served so far.
    pub fn batch_call_count(&self) -> usize {
        self.requests.read().len()
    }

    /// The id sets of every batch served, in call order.
    pub fn requested_batches(&self) -> Vec<Vec<MediaItemId>> {
        self.requests.read().clone()
    }
}

#[async_trait]
impl AvailabilityLookup for InMemoryAvailability {
    async fn availability_summaries(
        &self,
        ids: &[MediaItemId],
    ) -> Result<Vec<AvailabilitySummary>, StoreError> {
        self.requests.write().push(ids.to_vec());

        let summaries = self.summaries.read();
        let mut found: Vec<AvailabilitySummary> = ids
            .iter()
            .filter_map(|id| summaries.get(id).cloned())
            .collect();
        found.extend(self.unsolicited.read().iter().cloned());

        Ok(found)
    }
}
