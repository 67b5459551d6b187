//! Availability aggregation across a menu's media references.

use std::collections::{BTreeSet, HashMap};

use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;

use crate::upstream::AvailabilityLookup;

/// Builds the availability index for one menu resolution.
///
/// Collects the distinct media identifiers referenced across all courses and
/// items, fetches their summaries in a single batched lookup, and indexes
/// the results by media identity. Summaries for identifiers that were never
/// requested are dropped.
///
/// Availability is advisory: on any upstream failure this degrades to an
/// empty index instead of failing the resolution, so the menu still renders
/// with that one section unknown.
pub async fn aggregate_availability(
    menu: &Menu,
    lookup: &dyn AvailabilityLookup,
) -> HashMap<MediaItemId, AvailabilitySummary> {
    let requested: BTreeSet<MediaItemId> = menu
        .courses
        .iter()
        .flat_map(|course| course.items.iter())
        .map(|item| item.media_item_id.clone())
        .collect();

    if requested.is_empty() {
        return HashMap::new();
    }

    let ids: Vec<MediaItemId> = requested.iter().cloned().collect();
    match lookup.availability_summaries(&ids).await {
        Ok(summaries) => summaries
            .into_iter()
            .filter(|summary| requested.contains(&summary.media_item_id))
            .map(|summary| (summary.media_item_id.clone(), summary))
            .collect(),
        Err(error) => {
            tracing::warn!("availability lookup failed, rendering without provider data: {error}");
            HashMap::new()
        }
    }
}
