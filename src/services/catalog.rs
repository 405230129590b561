//! Lookups for page rendering.
//!
//! Pages never see a [`FetchError`](crate::common::FetchError): a store that
//! cannot be loaded is simply "not found", and tours that cannot be loaded
//! are an empty list.

use crate::api::StorefrontApi;
use crate::log_fetch_err;
use crate::models::{GuideStore, Tour};

pub async fn find_guide_store(api: &dyn StorefrontApi, slug: &str) -> Option<GuideStore> {
    match api.guide_store(slug).await {
        Ok(store) => Some(store),
        Err(e) => {
            log_fetch_err!("Store", slug, e);
            None
        }
    }
}

pub async fn list_tours(api: &dyn StorefrontApi, slug: &str) -> Vec<Tour> {
    match api.tours(slug).await {
        Ok(tours) => tours,
        Err(e) => {
            log_fetch_err!("Tours", slug, e);
            Vec::new()
        }
    }
}

pub async fn find_tour(api: &dyn StorefrontApi, slug: &str, tour_id: &str) -> Option<Tour> {
    list_tours(api, slug)
        .await
        .into_iter()
        .find(|t| t.id == tour_id)
}
