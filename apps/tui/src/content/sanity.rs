use std::time::Duration;

use async_trait::async_trait;

use crate::domain::AppleDay;

use super::{decode_document, ContentError, ContentSource};

/// Every apple, oldest first, projected to the fields the page shows.
pub const APPLE_QUERY: &str = r#"*[_type == "apple"] | order(date asc) {
  _id,
  date,
  appleName,
  "slug": slug.current,
  description,
  stats,
  "accentColor": accentColor.hex,
  "imageUrl": image.asset->url
}"#;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub token: Option<String>,
}

impl SanityConfig {
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        let version = self.api_version.trim_start_matches('v');
        format!(
            "https://{}.{host}/v{version}/data/query/{}",
            self.project_id, self.dataset
        )
    }
}

/// Reads apples from a Sanity dataset over its HTTP query API.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub const fn config(&self) -> &SanityConfig {
        &self.config
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch_apples(&self) -> Result<Vec<AppleDay>, ContentError> {
        let mut request = self
            .http
            .get(self.config.query_url())
            .query(&[("query", APPLE_QUERY)]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_document(&body)
    }

    fn describe(&self) -> String {
        format!(
            "sanity project {} dataset {}",
            self.config.project_id, self.config.dataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_cdn: bool) -> SanityConfig {
        SanityConfig {
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn,
            token: None,
        }
    }

    #[test]
    fn query_url_targets_api_or_cdn() {
        assert_eq!(
            config(false).query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
        assert_eq!(
            config(true).query_url(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn version_prefix_is_not_doubled() {
        let mut config = config(false);
        config.api_version = "v2024-01-01".to_string();
        assert!(config.query_url().contains("/v2024-01-01/"));
    }

    #[test]
    fn query_orders_apples_by_date() {
        assert!(APPLE_QUERY.contains(r#"_type == "apple""#));
        assert!(APPLE_QUERY.contains("order(date asc)"));
    }
}
