//! Error types for menu resolution and aggregation.

use thiserror::Error;

/// Errors surfaced by menu share resolution.
///
/// Enrichment failures (availability, lineage) never appear here: they
/// degrade to empty or absent data inside the engine. `Clone` so a memoized
/// resolve session can replay the cached outcome to every caller.
#[derive(Debug, Clone, Error)]
pub enum MenuShareError {
    /// No menu is reachable through the given identifier. Covers unknown
    /// slugs, unknown or expired draft tokens, and deleted menus. The
    /// boundary layer translates this into its 404-equivalent.
    #[error("Menu not found: {reason}")]
    NotFound {
        /// Why resolution produced nothing
        reason: String,
    },

    /// The upstream store failed in a way that is not absence. Propagated
    /// unmodified so the boundary layer can answer with a generic server
    /// error; never converted into a success response.
    #[error("Menu store failure: {reason}")]
    Upstream {
        /// The reason for the upstream failure
        reason: String,
    },

    /// The configured share base URL cannot produce canonical links.
    #[error("Invalid share base URL '{base}': {reason}")]
    InvalidShareBase {
        /// The configured base URL
        base: String,
        /// Why it was rejected
        reason: String,
    },
}
