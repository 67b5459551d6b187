//! Tastebuds Share - Public menu resolution and aggregation
//!
//! Resolves a shared menu by permanent public slug or time-limited draft
//! token, merges availability, fork lineage, and preview-image data, and
//! produces one consistent view model plus social-preview metadata for the
//! presentation layer. A pure read path: nothing here creates, mutates, or
//! persists store entities.

pub mod availability;
pub mod errors;
pub mod lineage;
pub mod preview;
pub mod resolver;
pub mod share_url;
pub mod upstream;
pub mod view_model;

// Re-export main types
pub use availability::aggregate_availability;
pub use errors::MenuShareError;
pub use lineage::resolve_lineage;
pub use preview::select_preview_images;
pub use resolver::{MenuResolveSession, ResolvedMenu, ShareAccess, ShareIdentifier};
pub use share_url::ShareUrlBuilder;
pub use view_model::{
    MenuShareService, MenuViewModel, SharedMenuView, SocialCard, SocialMetadata,
};

/// Convenience type alias for Results with MenuShareError.
pub type Result<T> = std::result::Result<T, MenuShareError>;
