// Monitoring service HTTP API client
use crate::application::dashboard_source::DashboardSource;
use crate::domain::dashboard::{DashboardDocument, DashboardRef};
use crate::domain::error::ApiError;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct GrafanaClient {
    client: reqwest::Client,
    root_url: String,
    api_key: String,
}

impl GrafanaClient {
    pub fn new(root_url: String, api_key: String) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            root_url,
            api_key,
        })
    }

    /// `<root>/api/<segments>`, keeping any path prefix of the root URL.
    ///
    /// `.` segments are dropped and `..` removes the previous one.
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: self.root_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.root_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        let mut cleaned: Vec<&str> = vec!["api"];
        for segment in segments {
            match segment {
                "" | "." => {}
                ".." => {
                    if cleaned.len() > 1 {
                        cleaned.pop();
                    }
                }
                s => cleaned.push(s),
            }
        }

        url.path_segments_mut()
            .map_err(|_| invalid("not a base URL".to_string()))?
            .pop_if_empty()
            .extend(cleaned);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl DashboardSource for GrafanaClient {
    async fn search_dashboards(&self) -> Result<Vec<DashboardRef>, ApiError> {
        let mut url = self.endpoint(["search"])?;
        // trailing slash
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push("");
        }
        self.get_json(url).await
    }

    async fn fetch_dashboard(&self, dashboard: &DashboardRef) -> Result<DashboardDocument, ApiError> {
        let segments = std::iter::once("dashboards").chain(dashboard.uri.split('/'));
        let url = self.endpoint(segments)?;
        self.get_json(url).await
    }
}
