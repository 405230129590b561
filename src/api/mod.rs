//! Client for the remote guide-store API.

use async_trait::async_trait;

use crate::common::FetchError;
use crate::models::{BookingRequest, GuideStore, Tour};

pub use client::*;

mod client;

/// Operations the storefront consumes from the remote API.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET {base}/{slug}`
    async fn guide_store(&self, slug: &str) -> Result<GuideStore, FetchError>;

    /// `GET {base}/{slug}/tours`
    async fn tours(&self, slug: &str) -> Result<Vec<Tour>, FetchError>;

    /// `POST {base}/{slug}/tours/{tour_id}/book`. Never retried.
    async fn book_tour(
        &self,
        slug: &str,
        tour_id: &str,
        request: &BookingRequest,
    ) -> Result<(), FetchError>;
}
