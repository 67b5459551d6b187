//! Upstream collaborator contracts for menu resolution.
//!
//! The engine is a pure read path over two external services: the menu store
//! (menu graphs, draft tokens, lineage) and the availability service
//! (provider summaries in one batch). Both are consumed through the traits
//! here; classification of failures into not-found vs. fatal happens once,
//! at this boundary, via [`StoreError`]'s kinds.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tastebuds_core::lineage::LineageInfo;
use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;
use thiserror::Error;

pub mod memory;
pub mod mock;
pub mod rest;

pub use memory::{InMemoryAvailability, InMemoryMenuStore};
pub use mock::{FailingAvailability, FailingMenuStore};
pub use rest::RestMenuStore;

/// Failure kinds reported by upstream collaborators.
///
/// The typed kind is the contract: callers branch on the variant, never on
/// message text. Adapters for untyped upstreams do whatever sniffing they
/// must internally and emit the right kind here.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested entity does not exist upstream.
    #[error("not found: {reason}")]
    NotFound {
        /// What was missing
        reason: String,
    },

    /// Any other upstream failure: network, malformed payload, unexpected
    /// status.
    #[error("upstream failure: {reason}")]
    Upstream {
        /// The reason for the failure
        reason: String,
    },
}

/// A draft-token resolution result from the menu store.
#[derive(Debug, Clone)]
pub struct DraftMenu {
    /// The menu the token is scoped to.
    pub menu: Menu,
    /// Short token fragment safe to show in draft banners.
    pub token_id_prefix: String,
    /// Expiry of the share token. Resolution must fail past this instant
    /// even if the menu itself still exists.
    pub token_expires_at: DateTime<Utc>,
}

/// Read-only contract of the menu store service.
#[async_trait]
pub trait MenuStore: Send + Sync + std::fmt::Debug {
    /// Fetches a public menu by its permanent slug.
    ///
    /// # Errors
    /// - `StoreError::NotFound` - No public menu matches the slug
    /// - `StoreError::Upstream` - Store unreachable or returned a bad payload
    async fn menu_by_slug(&self, slug: &str) -> Result<Menu, StoreError>;

    /// Fetches a menu through a draft share token, together with the token's
    /// expiry and a display fragment.
    ///
    /// # Errors
    /// - `StoreError::NotFound` - Token unknown, revoked, or menu deleted
    /// - `StoreError::Upstream` - Store unreachable or returned a bad payload
    async fn draft_menu_by_token(&self, token: &str) -> Result<DraftMenu, StoreError>;

    /// Fetches one hop of fork lineage for a public menu. Best-effort: the
    /// caller treats every failure as "no lineage panel".
    ///
    /// # Errors
    /// - `StoreError::NotFound` - Menu unknown or has no lineage record
    /// - `StoreError::Upstream` - Store unreachable or returned a bad payload
    async fn menu_lineage(&self, slug: &str) -> Result<LineageInfo, StoreError>;
}

/// Read-only contract of the availability service.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync + std::fmt::Debug {
    /// Looks up availability summaries for a set of media items in a single
    /// batched call. Implementations may return fewer summaries than
    /// requested, and may include identifiers that were never asked for;
    /// callers filter defensively.
    ///
    /// # Errors
    /// - `StoreError::Upstream` - Service unreachable or returned a bad payload
    async fn availability_summaries(
        &self,
        ids: &[MediaItemId],
    ) -> Result<Vec<AvailabilitySummary>, StoreError>;
}
