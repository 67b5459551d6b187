//! Fork lineage resolution for public menus.

use tastebuds_core::lineage::LineageInfo;

use crate::upstream::MenuStore;

/// Fetches one hop of fork lineage for a public slug, best-effort.
///
/// Lineage is enrichment: any failure, including not-found, yields `None`
/// and the rest of the view assembles without the panel. The fork list is
/// bounded to `display_limit` entries while `fork_count` passes through
/// untouched, so "4 shown of 23" stays expressible. Per-entry visibility
/// flags pass through so non-public references render unlinked.
pub async fn resolve_lineage(
    store: &dyn MenuStore,
    slug: &str,
    display_limit: usize,
) -> Option<LineageInfo> {
    match store.menu_lineage(slug).await {
        Ok(mut lineage) => {
            lineage.forks.truncate(display_limit);
            Some(lineage)
        }
        Err(error) => {
            tracing::debug!("lineage unavailable for '{slug}': {error}");
            None
        }
    }
}
