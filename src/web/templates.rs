use askama::Template;

use crate::web::views::{BookingView, StoreChrome, TourCard, TourDetail};

#[derive(Template)]
#[template(path = "store/home.html")]
pub struct StoreHomeTemplate {
    pub chrome: StoreChrome,
    pub guide_name: String,
    pub about_text: Option<String>,
    pub tours: Vec<TourCard>,
}

#[derive(Template)]
#[template(path = "store/about.html")]
pub struct AboutTemplate {
    pub chrome: StoreChrome,
    pub guide_name: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    /// Inline style for the hero: profile picture or brand colour.
    pub hero_style: String,
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
    pub tours: Vec<TourCard>,
    pub whatsapp_url: Option<String>,
}

#[derive(Template)]
#[template(path = "tour/detail.html")]
pub struct TourDetailTemplate {
    pub chrome: StoreChrome,
    pub tour: TourDetail,
    pub booking: BookingView,
}

/// Just the booking section, swapped in place by htmx.
#[derive(Template)]
#[template(path = "partials/booking_form.html")]
pub struct BookingSectionTemplate {
    pub booking: BookingView,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub heading: &'static str,
    pub message: &'static str,
    pub hint: Option<&'static str>,
}

impl NotFoundTemplate {
    pub fn page() -> Self {
        Self {
            heading: "Page not found",
            message: "The page you're looking for doesn't exist.",
            hint: None,
        }
    }

    pub fn store() -> Self {
        Self {
            heading: "Store not found",
            message: "The guide store you're looking for doesn't exist or has been removed.",
            hint: Some("Try visiting with a valid slug, e.g. ?slug=ahmed"),
        }
    }
}
