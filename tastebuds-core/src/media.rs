//! Media entities referenced by menu items.
//!
//! Media items are owned by the external catalog; menus reference them by
//! identifier and the store resolves the reference when materializing a menu
//! graph. Nothing in this crate creates or mutates media records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a media item in the external catalog.
///
/// Used as the indexing key for availability summaries. Identifiers are
/// opaque strings minted by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItemId(String);

impl MediaItemId {
    /// Creates an identifier from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MediaItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Media type classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    TvShow,
    Album,
    Book,
    Other,
}

/// A media record as resolved by the catalog service. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: MediaItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub cover_image_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub canonical_url: Option<String>,
    pub media_type: MediaType,
}

/// Provider availability for one media item, produced by the availability
/// service. Indexed and merged per resolution, never cached beyond it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilitySummary {
    pub media_item_id: MediaItemId,
    /// Providers currently carrying the item, in the service's order.
    pub providers: Vec<String>,
    /// Number of providers offering the item with a subscription.
    pub streaming_count: u32,
    /// Number of providers offering the item for rent or purchase.
    pub rental_count: u32,
}
