//! Remote tag service: the trait the list driver talks to and its HTTP
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{QueryParameters, TagRecord},
    error::FetchError,
    protocol::{ServiceErrorBody, TagsResponse},
};
use tracing::debug;
use url::Url;

use crate::{config::Settings, error::ClientError};

#[async_trait]
pub trait TagService: Send + Sync {
    async fn fetch_tags(&self, parameters: &QueryParameters) -> Result<Vec<TagRecord>, FetchError>;
}

pub struct HttpTagService {
    http: Client,
    tags_url: Url,
    site: String,
}

impl HttpTagService {
    /// `base_url` is the API root, e.g. `https://api.stackexchange.com/2.2`.
    pub fn new(base_url: &str, site: impl Into<String>) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), base_url, site)
    }

    pub fn with_client(
        http: Client,
        base_url: &str,
        site: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let mut root = Url::parse(base_url.trim())?;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        Ok(Self {
            http,
            tags_url: root.join("tags")?,
            site: site.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if settings.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        }
        let http = builder.build().map_err(ClientError::HttpClient)?;
        Self::with_client(http, &settings.api_base_url, settings.site.clone())
            .map_err(ClientError::InvalidBaseUrl)
    }

    /// Full request URL for `parameters`, query keys in the service's
    /// documented order.
    pub fn request_url(&self, parameters: &QueryParameters) -> Url {
        let mut url = self.tags_url.clone();
        url.query_pairs_mut()
            .append_pair("order", parameters.sort_order.as_str())
            .append_pair("sort", parameters.sort_field.as_str())
            .append_pair("site", &self.site)
            .append_pair("page", &parameters.page_number().to_string())
            .append_pair("pagesize", &parameters.page_size.get().to_string());
        url
    }
}

#[async_trait]
impl TagService for HttpTagService {
    async fn fetch_tags(&self, parameters: &QueryParameters) -> Result<Vec<TagRecord>, FetchError> {
        let url = self.request_url(parameters);
        debug!(%url, "GET tags");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|b| b.summary());
            return Err(FetchError::Response {
                status: status.as_u16(),
                detail,
            });
        }

        let page: TagsResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        debug!(
            items = page.items.len(),
            has_more = ?page.has_more,
            quota_remaining = ?page.quota_remaining,
            "tags page received"
        );
        Ok(page.items)
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
