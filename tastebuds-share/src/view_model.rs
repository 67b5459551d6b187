//! View model assembly for shared menu pages.
//!
//! One resolution produces two parallel outputs: the full page view model
//! and the social-preview metadata. Both are derived from the same resolved
//! menu snapshot, which is what the memoized resolve session guarantees.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tastebuds_core::config::{ShareConfig, TastebudsConfig};
use tastebuds_core::lineage::LineageInfo;
use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;

use crate::availability::aggregate_availability;
use crate::errors::MenuShareError;
use crate::lineage::resolve_lineage;
use crate::preview::select_preview_images;
use crate::resolver::{MenuResolveSession, ShareAccess, ShareIdentifier};
use crate::share_url::ShareUrlBuilder;
use crate::upstream::{AvailabilityLookup, MenuStore};

/// Immutable per-request view of a shared menu page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuViewModel {
    pub menu: Menu,
    pub access: ShareAccess,
    /// Sum of item counts across all courses.
    pub total_items: usize,
    /// Canonical absolute share link for this access path.
    pub share_url: String,
    /// Availability index keyed by media identity; empty when the service
    /// was unavailable or the menu references nothing.
    pub availability: HashMap<MediaItemId, AvailabilitySummary>,
    /// Fork ancestry panel; absent for drafts and when lineage could not be
    /// fetched.
    pub lineage: Option<LineageInfo>,
    /// Cover images for in-page preview tiles.
    pub preview_images: Vec<String>,
}

/// Social card rendering hint.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SocialCard {
    /// Text-only card; no preview images were available.
    Summary,
    /// Large-image card backed by the first preview image.
    SummaryLargeImage,
}

/// Social-preview metadata emitted alongside the page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SocialMetadata {
    pub canonical_url: String,
    pub title: String,
    pub description: String,
    /// Ordered cover image candidates, possibly empty.
    pub images: Vec<String>,
    pub card: SocialCard,
}

/// The complete output of one menu resolution.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SharedMenuView {
    pub page: MenuViewModel,
    pub social: SocialMetadata,
}

/// Resolves shared menus and assembles their view models.
#[derive(Debug)]
pub struct MenuShareService {
    store: Arc<dyn MenuStore>,
    availability: Arc<dyn AvailabilityLookup>,
    share_urls: ShareUrlBuilder,
    share_config: ShareConfig,
}

impl MenuShareService {
    /// Creates the service over the given upstream collaborators.
    ///
    /// # Errors
    /// - `MenuShareError::InvalidShareBase` - If the configured share base
    ///   URL cannot produce canonical links
    pub fn new(
        store: Arc<dyn MenuStore>,
        availability: Arc<dyn AvailabilityLookup>,
        config: &TastebudsConfig,
    ) -> Result<Self, MenuShareError> {
        let share_urls = ShareUrlBuilder::new(&config.share.base_url)?;
        tracing::info!("menu share service ready, base={}", config.share.base_url);

        Ok(Self {
            store,
            availability,
            share_urls,
            share_config: config.share.clone(),
        })
    }

    /// Opens a memoized resolve session for one identifier.
    ///
    /// Callers that generate metadata and body separately hold one session
    /// so both observe the same fetch outcome.
    pub fn open(&self, identifier: ShareIdentifier) -> MenuResolveSession {
        MenuResolveSession::new(self.store.clone(), identifier)
    }

    /// Resolves and assembles in one step.
    ///
    /// # Errors
    /// - `MenuShareError::NotFound` - Identifier resolves to nothing
    /// - `MenuShareError::Upstream` - Store failed fatally on the slug path
    pub async fn view(&self, identifier: ShareIdentifier) -> Result<SharedMenuView, MenuShareError> {
        let session = self.open(identifier);
        self.assemble(&session).await
    }

    /// Assembles the page view model and social metadata for a session.
    ///
    /// The menu fetch is the hard prerequisite; the two enrichment reads
    /// (availability, lineage) run concurrently afterwards and may complete
    /// in either order. Enrichment failures degrade to empty or absent data
    /// and never fail the assembly.
    ///
    /// # Errors
    /// - `MenuShareError::NotFound` - Identifier resolves to nothing
    /// - `MenuShareError::Upstream` - Store failed fatally on the slug path
    pub async fn assemble(
        &self,
        session: &MenuResolveSession,
    ) -> Result<SharedMenuView, MenuShareError> {
        let resolved = session.resolve().await?;
        let menu = &resolved.menu;

        let share_url = match session.identifier() {
            ShareIdentifier::Slug(slug) => self.share_urls.menu_url(slug),
            ShareIdentifier::DraftToken(token) => self.share_urls.draft_url(token),
        };

        // Drafts never expose lineage.
        let lineage_slug = match &resolved.access {
            ShareAccess::Public { slug } => Some(slug.as_str()),
            ShareAccess::Draft { .. } => None,
        };

        let (availability, lineage) = tokio::join!(
            aggregate_availability(menu, self.availability.as_ref()),
            async {
                match lineage_slug {
                    Some(slug) => {
                        resolve_lineage(
                            self.store.as_ref(),
                            slug,
                            self.share_config.fork_display_limit,
                        )
                        .await
                    }
                    None => None,
                }
            }
        );

        let preview_images = select_preview_images(menu, self.share_config.tile_image_limit);
        let social_images = select_preview_images(menu, self.share_config.social_image_limit);
        let total_items = menu.total_items();

        let description = menu
            .description
            .clone()
            .unwrap_or_else(|| fallback_description(menu));
        let card = if social_images.is_empty() {
            SocialCard::Summary
        } else {
            SocialCard::SummaryLargeImage
        };

        Ok(SharedMenuView {
            page: MenuViewModel {
                menu: menu.clone(),
                access: resolved.access.clone(),
                total_items,
                share_url: share_url.clone(),
                availability,
                lineage,
                preview_images,
            },
            social: SocialMetadata {
                canonical_url: share_url,
                title: menu.title.clone(),
                description,
                images: social_images,
                card,
            },
        })
    }
}

/// Generated description for menus whose authors left none.
fn fallback_description(menu: &Menu) -> String {
    format!(
        "A {}-course menu with {} featured picks on Tastebuds.",
        menu.courses.len(),
        menu.total_items()
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tastebuds_core::lineage::LineageInfo;
    use tastebuds_core::media::{MediaItem, MediaType};
    use tastebuds_core::menu::{Course, CourseItem};
    use uuid::Uuid;

    use super::*;
    use crate::upstream::{DraftMenu, FailingAvailability, InMemoryAvailability, InMemoryMenuStore};

    fn item(media_id: &str, cover: Option<&str>) -> CourseItem {
        let media_item_id = MediaItemId::from(media_id);
        CourseItem {
            id: Uuid::new_v4(),
            media_item_id: media_item_id.clone(),
            position: 0,
            notes: None,
            media: Some(MediaItem {
                id: media_item_id,
                title: media_id.to_string(),
                subtitle: None,
                cover_image_url: cover.map(|url| url.to_string()),
                release_date: None,
                canonical_url: None,
                media_type: MediaType::Movie,
            }),
        }
    }

    fn two_course_menu(slug: &str, description: Option<&str>) -> Menu {
        Menu {
            id: Uuid::new_v4(),
            slug: slug.to_string(),
            title: "Movie Night".to_string(),
            description: description.map(|d| d.to_string()),
            is_public: true,
            courses: vec![
                Course {
                    id: Uuid::new_v4(),
                    position: 1,
                    title: "Openers".to_string(),
                    description: None,
                    items: vec![item("m1", Some("a.jpg")), item("m2", None)],
                },
                Course {
                    id: Uuid::new_v4(),
                    position: 2,
                    title: "Main Feature".to_string(),
                    description: None,
                    items: vec![item("m3", Some("b.jpg"))],
                },
            ],
            pairings: vec![],
        }
    }

    fn service(
        store: Arc<InMemoryMenuStore>,
        availability: Arc<dyn AvailabilityLookup>,
    ) -> MenuShareService {
        MenuShareService::new(store, availability, &TastebudsConfig::for_testing()).unwrap()
    }

    #[tokio::test]
    async fn test_assembled_view_carries_share_url_and_counts() {
        let store = Arc::new(InMemoryMenuStore::new());
        store.insert_menu(two_course_menu("movie-night", Some("Late picks")));
        let service = service(store, Arc::new(InMemoryAvailability::new()));

        let view = service
            .view(ShareIdentifier::Slug("movie-night".to_string()))
            .await
            .unwrap();

        assert_eq!(view.page.total_items, 3);
        assert_eq!(view.page.share_url, "http://localhost:3000/m/movie-night");
        assert_eq!(view.social.canonical_url, view.page.share_url);
        assert_eq!(view.social.description, "Late picks");
        assert_eq!(view.social.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(view.social.card, SocialCard::SummaryLargeImage);
    }

    #[tokio::test]
    async fn test_missing_description_generates_fallback_sentence() {
        let store = Arc::new(InMemoryMenuStore::new());
        store.insert_menu(two_course_menu("movie-night", None));
        let service = service(store, Arc::new(InMemoryAvailability::new()));

        let view = service
            .view(ShareIdentifier::Slug("movie-night".to_string()))
            .await
            .unwrap();

        assert_eq!(
            view.social.description,
            "A 2-course menu with 3 featured picks on Tastebuds."
        );
    }

    #[tokio::test]
    async fn test_menu_without_images_gets_summary_card() {
        let store = Arc::new(InMemoryMenuStore::new());
        let mut menu = two_course_menu("bare", None);
        for course in &mut menu.courses {
            for item in &mut course.items {
                item.media = None;
            }
        }
        store.insert_menu(menu);
        let service = service(store, Arc::new(InMemoryAvailability::new()));

        let view = service
            .view(ShareIdentifier::Slug("bare".to_string()))
            .await
            .unwrap();

        assert!(view.social.images.is_empty());
        assert_eq!(view.social.card, SocialCard::Summary);
        assert!(view.page.preview_images.is_empty());
    }

    #[tokio::test]
    async fn test_availability_outage_still_renders_the_rest() {
        let store = Arc::new(InMemoryMenuStore::new());
        store.insert_menu(two_course_menu("movie-night", None));
        let service = service(store, Arc::new(FailingAvailability::new()));

        let view = service
            .view(ShareIdentifier::Slug("movie-night".to_string()))
            .await
            .unwrap();

        assert!(view.page.availability.is_empty());
        assert_eq!(view.page.total_items, 3);
        assert_eq!(view.social.images, vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn test_draft_view_never_exposes_lineage() {
        let store = Arc::new(InMemoryMenuStore::new());
        let menu = two_course_menu("secret", None);
        store.insert_lineage(
            "secret",
            LineageInfo {
                source: None,
                forks: vec![],
                fork_count: 0,
            },
        );
        store.insert_draft(
            "tok",
            DraftMenu {
                menu,
                token_id_prefix: "tok_a1b2".to_string(),
                token_expires_at: Utc::now() + Duration::hours(1),
            },
        );
        let service = service(store, Arc::new(InMemoryAvailability::new()));

        let view = service
            .view(ShareIdentifier::DraftToken("tok".to_string()))
            .await
            .unwrap();

        assert!(view.page.lineage.is_none());
        assert_eq!(view.page.share_url, "http://localhost:3000/draft/tok");
        assert!(matches!(view.page.access, ShareAccess::Draft { .. }));
    }

    #[tokio::test]
    async fn test_public_view_carries_bounded_lineage() {
        let store = Arc::new(InMemoryMenuStore::new());
        store.insert_menu(two_course_menu("movie-night", None));
        store.insert_lineage(
            "movie-night",
            LineageInfo {
                source: None,
                forks: (0..6)
                    .map(|i| tastebuds_core::lineage::MenuSummary {
                        id: Uuid::new_v4(),
                        slug: format!("fork-{i}"),
                        title: format!("Fork {i}"),
                        is_public: true,
                    })
                    .collect(),
                fork_count: 6,
            },
        );
        let service = service(store, Arc::new(InMemoryAvailability::new()));

        let view = service
            .view(ShareIdentifier::Slug("movie-night".to_string()))
            .await
            .unwrap();

        let lineage = view.page.lineage.unwrap();
        assert_eq!(lineage.forks.len(), 4);
        assert_eq!(lineage.fork_count, 6);
    }

    #[test]
    fn test_fallback_description_counts() {
        let menu = two_course_menu("movie-night", None);
        assert_eq!(
            fallback_description(&menu),
            "A 2-course menu with 3 featured picks on Tastebuds."
        );
    }
}
