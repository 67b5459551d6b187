//! Canonical share link construction.

use url::Url;

use crate::errors::MenuShareError;

/// Builds canonical absolute share links from a configured base URL.
///
/// The base is validated and normalized once at construction; link building
/// is infallible afterwards.
#[derive(Debug, Clone)]
pub struct ShareUrlBuilder {
    base: String,
}

impl ShareUrlBuilder {
    /// Validates and normalizes the configured base URL.
    ///
    /// Accepts absolute http(s) URLs, with or without a path prefix;
    /// trailing slashes are stripped.
    ///
    /// # Errors
    /// - `MenuShareError::InvalidShareBase` - If the base is relative, has a
    ///   non-http scheme, or has no host
    pub fn new(base: &str) -> Result<Self, MenuShareError> {
        let parsed = Url::parse(base).map_err(|e| MenuShareError::InvalidShareBase {
            base: base.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MenuShareError::InvalidShareBase {
                base: base.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if parsed.host_str().is_none() {
            return Err(MenuShareError::InvalidShareBase {
                base: base.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self {
            base: parsed.to_string().trim_end_matches('/').to_string(),
        })
    }

    /// Canonical link for a public menu slug.
    pub fn menu_url(&self, slug: &str) -> String {
        format!("{}/m/{}", self.base, urlencoding::encode(slug))
    }

    /// Canonical link for a draft share token.
    pub fn draft_url(&self, token: &str) -> String {
        format!("{}/draft/{}", self.base, urlencoding::encode(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_url_from_plain_base() {
        let builder = ShareUrlBuilder::new("https://tastebuds.example").unwrap();
        assert_eq!(
            builder.menu_url("movie-night"),
            "https://tastebuds.example/m/movie-night"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let builder = ShareUrlBuilder::new("https://tastebuds.example/").unwrap();
        assert_eq!(
            builder.draft_url("tok123"),
            "https://tastebuds.example/draft/tok123"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        let builder = ShareUrlBuilder::new("https://example.com/tastebuds/").unwrap();
        assert_eq!(
            builder.menu_url("brunch"),
            "https://example.com/tastebuds/m/brunch"
        );
    }

    #[test]
    fn test_slug_is_percent_encoded() {
        let builder = ShareUrlBuilder::new("http://localhost:3000").unwrap();
        assert_eq!(
            builder.menu_url("date night/2"),
            "http://localhost:3000/m/date%20night%2F2"
        );
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let result = ShareUrlBuilder::new("tastebuds.example/menus");
        assert!(matches!(
            result,
            Err(MenuShareError::InvalidShareBase { .. })
        ));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let result = ShareUrlBuilder::new("ftp://tastebuds.example");
        assert!(matches!(
            result,
            Err(MenuShareError::InvalidShareBase { .. })
        ));
    }
}
