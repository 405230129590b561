use async_trait::async_trait;
use log::{debug, info};
use moka::future::Cache;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use crate::common::FetchError;
use crate::models::{BookingRequest, GuideStore, Tour};
use crate::types::{ApiErrorBody, GuideStoreResponse, ToursResponse};

use super::StorefrontApi;

const CACHE_CAPACITY: u64 = 1_000;

/// HTTP implementation of [`StorefrontApi`].
///
/// Successful lookups are cached per slug for `cache_ttl`; booking
/// submissions always hit the network.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    base_url: Url,
    stores: Cache<String, GuideStore>,
    tours: Cache<String, Vec<Tour>>,
}

impl StorefrontClient {
    pub fn new(base_url: &str, cache_ttl: Duration) -> Result<Self, FetchError> {
        Self::with_http_client(Client::new(), base_url, cache_ttl)
    }

    pub fn with_http_client(
        http: Client,
        base_url: &str,
        cache_ttl: Duration,
    ) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            stores: lookup_cache(cache_ttl),
            tours: lookup_cache(cache_ttl),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{segments...}` with every segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn clear_cache(&self) {
        self.stores.invalidate_all();
        self.tours.invalidate_all();
        info!("Storefront lookup cache cleared");
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("GET {url}");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: None,
            });
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn guide_store(&self, slug: &str) -> Result<GuideStore, FetchError> {
        if let Some(hit) = self.stores.get(slug).await {
            debug!("Cache hit for store {slug:?}");
            return Ok(hit);
        }

        let url = self.endpoint(&[slug])?;
        let envelope: GuideStoreResponse = self.get_json(url).await?;
        let store = envelope
            .into_data()
            .ok_or_else(|| FetchError::Unsuccessful(format!("store {slug:?}")))?;

        self.stores.insert(slug.to_string(), store.clone()).await;
        Ok(store)
    }

    async fn tours(&self, slug: &str) -> Result<Vec<Tour>, FetchError> {
        if let Some(hit) = self.tours.get(slug).await {
            debug!("Cache hit for tours of {slug:?}");
            return Ok(hit);
        }

        let url = self.endpoint(&[slug, "tours"])?;
        let envelope: ToursResponse = self.get_json(url).await?;
        let tours = envelope
            .into_data()
            .and_then(|data| data.tours)
            .ok_or_else(|| FetchError::Unsuccessful(format!("tours of {slug:?}")))?;

        self.tours.insert(slug.to_string(), tours.clone()).await;
        Ok(tours)
    }

    async fn book_tour(
        &self,
        slug: &str,
        tour_id: &str,
        request: &BookingRequest,
    ) -> Result<(), FetchError> {
        let url = self.endpoint(&[slug, "tours", tour_id, "book"])?;
        debug!("POST {url}");

        let res = self.http.post(url).json(request).send().await?;
        let status = res.status();
        if status.is_success() {
            info!("Booking request accepted for tour {tour_id:?} of store {slug:?}");
            return Ok(());
        }

        Err(FetchError::Status {
            status: status.as_u16(),
            message: error_message(status, &res.bytes().await.unwrap_or_default()),
        })
    }
}

fn lookup_cache<V>(ttl: Duration) -> Cache<String, V>
where
    V: Clone + Send + Sync + 'static,
{
    // A zero TTL turns caching off.
    if ttl.is_zero() {
        return Cache::builder().max_capacity(0).build();
    }
    Cache::builder()
        .max_capacity(CACHE_CAPACITY)
        .time_to_live(ttl)
        .build()
}

/// The API's `message`, if the error body carries a non-empty one.
fn error_message(status: StatusCode, body: &[u8]) -> Option<String> {
    let parsed: ApiErrorBody = match serde_json::from_slice(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Unreadable error body for status {status}: {e}");
            return None;
        }
    };
    parsed.message.filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StorefrontClient {
        StorefrontClient::new(base, Duration::from_secs(60)).unwrap()
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let c = client("https://api.example.com/api/guide-stores/public/");
        let url = c.endpoint(&["ahmed", "tours", "t 1/x", "book"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/api/guide-stores/public/ahmed/tours/t%201%2Fx/book"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            StorefrontClient::new("not a url", Duration::from_secs(1)),
            Err(FetchError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            StorefrontClient::new("mailto:guide@example.com", Duration::from_secs(1)),
            Err(FetchError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn error_message_prefers_non_empty_message() {
        let status = StatusCode::CONFLICT;
        assert_eq!(
            error_message(status, br#"{"message":"Tour fully booked"}"#).as_deref(),
            Some("Tour fully booked")
        );
        assert_eq!(error_message(status, br#"{"message":"  "}"#), None);
        assert_eq!(error_message(status, b"<html>oops</html>"), None);
        assert_eq!(error_message(status, b""), None);
    }
}
