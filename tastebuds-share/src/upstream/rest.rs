//! HTTP adapter for the external menu store and availability service.
//!
//! Wraps the store's REST API behind the [`MenuStore`] and
//! [`AvailabilityLookup`] traits. All failure classification lives here:
//! status codes first, with message sniffing kept only as a last-resort
//! adapter for untyped error payloads.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tastebuds_core::config::StoreConfig;
use tastebuds_core::lineage::LineageInfo;
use tastebuds_core::media::{AvailabilitySummary, MediaItemId};
use tastebuds_core::menu::Menu;

use super::{AvailabilityLookup, DraftMenu, MenuStore, StoreError};

/// REST client for the menu store service.
#[derive(Debug, Clone)]
pub struct RestMenuStore {
    client: reqwest::Client,
    endpoint: String,
}

/// Error payload shape used by the menu store. Older deployments use
/// `message` instead of `error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Draft resolution payload from the store.
#[derive(Debug, Deserialize)]
struct DraftMenuBody {
    menu: Menu,
    token_id_prefix: String,
    token_expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
struct AvailabilityBatchRequest<'a> {
    media_item_ids: &'a [MediaItemId],
}

impl RestMenuStore {
    /// Creates a client from store configuration.
    ///
    /// # Errors
    /// - `StoreError::Upstream` - If the underlying HTTP client cannot be built
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| StoreError::Upstream {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a request and decodes a JSON body, classifying failures.
    async fn request_json<T>(&self, request: reqwest::RequestBuilder) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| StoreError::Upstream {
            reason: format!("menu store request failed: {e}"),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &body));
        }

        response.json::<T>().await.map_err(|e| StoreError::Upstream {
            reason: format!("malformed menu store payload: {e}"),
        })
    }
}

#[async_trait]
impl MenuStore for RestMenuStore {
    async fn menu_by_slug(&self, slug: &str) -> Result<Menu, StoreError> {
        let url = format!(
            "{}/api/menus/by-slug/{}",
            self.endpoint,
            urlencoding::encode(slug)
        );
        self.request_json(self.client.get(&url)).await
    }

    async fn draft_menu_by_token(&self, token: &str) -> Result<DraftMenu, StoreError> {
        let url = format!(
            "{}/api/drafts/{}",
            self.endpoint,
            urlencoding::encode(token)
        );
        let body: DraftMenuBody = self.request_json(self.client.get(&url)).await?;

        Ok(DraftMenu {
            menu: body.menu,
            token_id_prefix: body.token_id_prefix,
            token_expires_at: body.token_expires_at,
        })
    }

    async fn menu_lineage(&self, slug: &str) -> Result<LineageInfo, StoreError> {
        let url = format!(
            "{}/api/menus/{}/lineage",
            self.endpoint,
            urlencoding::encode(slug)
        );
        self.request_json(self.client.get(&url)).await
    }
}

#[async_trait]
impl AvailabilityLookup for RestMenuStore {
    async fn availability_summaries(
        &self,
        ids: &[MediaItemId],
    ) -> Result<Vec<AvailabilitySummary>, StoreError> {
        let url = format!("{}/api/availability/batch", self.endpoint);
        let body = AvailabilityBatchRequest {
            media_item_ids: ids,
        };
        self.request_json(self.client.post(&url).json(&body)).await
    }
}

/// Classifies a non-success store response into a typed error kind.
///
/// Status codes decide first. The message check is a fallback for upstream
/// deployments that tunnel absence through 5xx responses with a descriptive
/// payload.
fn classify_failure(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| body.trim().to_string());

    if status == StatusCode::NOT_FOUND || is_not_found_message(&message) {
        let reason = if message.is_empty() {
            "menu not found".to_string()
        } else {
            message
        };
        return StoreError::NotFound { reason };
    }

    StoreError::Upstream {
        reason: format!("menu store returned {status}: {message}"),
    }
}

/// Last-resort sniffing for untyped error payloads. Matches the store's
/// current wording; if that wording changes, these responses surface as
/// fatal instead of not-found.
fn is_not_found_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("menu not found") || lowered.contains("404")
}
