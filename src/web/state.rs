use std::sync::Arc;

use storefront::api::StorefrontApi;

use crate::web::security::InFlightBookings;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StorefrontApi>,
    pub in_flight: Arc<InFlightBookings>,
}

impl AppState {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self {
            api,
            in_flight: Arc::new(InFlightBookings::new()),
        }
    }
}
