//! Menu resolution by public slug or draft share token.
//!
//! A [`MenuResolveSession`] is the unit of consistency: it lives for one
//! logical request, performs the underlying store fetch exactly once, and
//! replays that outcome to every caller. Metadata generation and page
//! assembly therefore always observe the same menu snapshot, even when the
//! store is mutated between their calls.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tastebuds_core::menu::Menu;
use tokio::sync::OnceCell;

use crate::errors::MenuShareError;
use crate::upstream::{MenuStore, StoreError};

/// The two ways a menu can be reached from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShareIdentifier {
    /// Permanent public slug.
    Slug(String),
    /// Time-limited draft share token.
    DraftToken(String),
}

/// How the resolved menu was reached, with access-path metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShareAccess {
    /// Reached through the permanent public slug.
    Public {
        /// The slug the menu was resolved by.
        slug: String,
    },
    /// Reached through a draft share token.
    Draft {
        /// Short token fragment safe to show in draft banners.
        token_id_prefix: String,
        /// When the token stops resolving.
        expires_at: DateTime<Utc>,
    },
}

/// A menu snapshot together with its access path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMenu {
    pub menu: Menu,
    pub access: ShareAccess,
}

/// Per-request memoized menu resolution.
///
/// Discarded with the request; never a process-wide cache.
#[derive(Debug)]
pub struct MenuResolveSession {
    store: Arc<dyn MenuStore>,
    identifier: ShareIdentifier,
    outcome: OnceCell<Result<Arc<ResolvedMenu>, MenuShareError>>,
}

impl MenuResolveSession {
    /// Creates a session for one identifier against one store.
    pub fn new(store: Arc<dyn MenuStore>, identifier: ShareIdentifier) -> Self {
        Self {
            store,
            identifier,
            outcome: OnceCell::new(),
        }
    }

    /// The identifier this session resolves.
    pub fn identifier(&self) -> &ShareIdentifier {
        &self.identifier
    }

    /// Resolves the menu, fetching from the store at most once.
    ///
    /// The first call performs the fetch; every later call, successful or
    /// not, replays the cached outcome.
    ///
    /// # Errors
    /// - `MenuShareError::NotFound` - Slug unknown, token unknown or
    ///   expired, or menu deleted
    /// - `MenuShareError::Upstream` - Store failed in a way that is not
    ///   absence (slug path only; propagated unmodified)
    pub async fn resolve(&self) -> Result<Arc<ResolvedMenu>, MenuShareError> {
        self.outcome
            .get_or_init(|| async {
                fetch_resolved(self.store.as_ref(), &self.identifier)
                    .await
                    .map(Arc::new)
            })
            .await
            .clone()
    }
}

/// Single uncached resolution against the store.
async fn fetch_resolved(
    store: &dyn MenuStore,
    identifier: &ShareIdentifier,
) -> Result<ResolvedMenu, MenuShareError> {
    match identifier {
        ShareIdentifier::Slug(slug) => {
            let menu = store.menu_by_slug(slug).await.map_err(|error| match error {
                StoreError::NotFound { reason } => MenuShareError::NotFound { reason },
                StoreError::Upstream { reason } => MenuShareError::Upstream { reason },
            })?;

            Ok(ResolvedMenu {
                menu,
                access: ShareAccess::Public { slug: slug.clone() },
            })
        }
        ShareIdentifier::DraftToken(token) => {
            // Every draft failure reads as absence.
            let draft =
                store
                    .draft_menu_by_token(token)
                    .await
                    .map_err(|error| MenuShareError::NotFound {
                        reason: error.to_string(),
                    })?;

            if draft.token_expires_at <= Utc::now() {
                return Err(MenuShareError::NotFound {
                    reason: format!("draft link {} expired", draft.token_id_prefix),
                });
            }

            Ok(ResolvedMenu {
                menu: draft.menu,
                access: ShareAccess::Draft {
                    token_id_prefix: draft.token_id_prefix,
                    expires_at: draft.token_expires_at,
                },
            })
        }
    }
}
