//! Always-failing upstream fixtures for error-path tests.

use async_trait::async_trait;
use tastebuds_core::lineage::LineageInfo;
use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;

use super::{AvailabilityLookup, DraftMenu, MenuStore, StoreError};

/// Menu store that fails every call with a configured error kind.
#[derive(Debug)]
pub struct FailingMenuStore {
    error: StoreError,
}

impl FailingMenuStore {
    /// Store that is unreachable: every call fails fatally.
    pub fn unreachable() -> Self {
        Self {
            error: StoreError::Upstream {
                reason: "connection refused".to_string(),
            },
        }
    }

    /// Store that knows nothing: every call reports absence.
    pub fn missing() -> Self {
        Self {
            error: StoreError::NotFound {
                reason: "menu not found".to_string(),
            },
        }
    }
}

#[async_trait]
impl MenuStore for FailingMenuStore {
    async fn menu_by_slug(&self, _slug: &str) -> Result<Menu, StoreError> {
        Err(self.error.clone())
    }

    async fn draft_menu_by_token(&self, _token: &str) -> Result<DraftMenu, StoreError> {
        Err(self.error.clone())
    }

    async fn menu_lineage(&self, _slug: &str) -> Result<LineageInfo, StoreError> {
        Err(self.error.clone())
    }
}

/// Availability service that fails every batch lookup.
#[derive(Debug)]
pub struct FailingAvailability;

impl FailingAvailability {
    /// Creates the fixture.
    pub fn new() -> Self {
        Self
    }
}

impl Default for FailingAvailability {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityLookup for FailingAvailability {
    async fn availability_summaries(
        &self,
        _ids: &[MediaItemId],
    ) -> Result<Vec<AvailabilitySummary>, StoreError> {
        Err(StoreError::Upstream {
            reason: "availability service timed out".to_string(),
        })
    }
}
