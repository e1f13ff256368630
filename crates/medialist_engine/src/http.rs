use std::time::Duration;

use medialist_core::{ListingPayload, ReferenceEntry};
use medialist_logging::medialist_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::service::{CatalogQuery, CatalogService, ReferenceService};
use crate::{FailureKind, FetchError, ServiceKind};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Root of the backend API; service paths are resolved relative to it.
    pub base_url: String,
    pub favorites_path: String,
    pub reviews_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Reuse a reference list for later pages of the same category session.
    pub cache_reference_sets: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api/v1/".to_string(),
            favorites_path: "user/favorites".to_string(),
            reviews_path: "reviews".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            cache_reference_sets: true,
        }
    }
}

/// reqwest client bound to the API root.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    pub(crate) fn new(settings: &ServiceSettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        medialist_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let body = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

/// `GET {base}/{media_type}/{category}?page={page}`
#[derive(Debug, Clone)]
pub(crate) struct HttpCatalogService {
    http: HttpClient,
}

impl HttpCatalogService {
    pub(crate) fn with_client(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl CatalogService for HttpCatalogService {
    async fn get_list(&self, query: &CatalogQuery) -> Result<ListingPayload, FetchError> {
        let mut url = self.http.endpoint(&format!(
            "{}/{}",
            query.media_type.as_str(),
            query.category.as_str()
        ))?;
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string());
        self.http.get_json(url).await
    }
}

/// `GET {base}/{path}` returning the whole list.
#[derive(Debug, Clone)]
pub(crate) struct HttpReferenceService {
    http: HttpClient,
    path: String,
    kind: ServiceKind,
}

impl HttpReferenceService {
    pub(crate) fn with_client(http: HttpClient, path: String, kind: ServiceKind) -> Self {
        Self { http, path, kind }
    }
}

#[async_trait::async_trait]
impl ReferenceService for HttpReferenceService {
    async fn get_list(&self) -> Result<Vec<ReferenceEntry>, FetchError> {
        let url = self.http.endpoint(&self.path)?;
        let entries: Vec<ReferenceEntry> = self.http.get_json(url).await?;
        medialist_debug!("{} list returned {} entries", self.kind, entries.len());
        Ok(entries)
    }
}

/// Parses the API root, forcing a trailing slash so relative joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{raw} cannot be used as a base url"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
