//! Flat view models handed to the templates.

use chrono::{Datelike, NaiveDate, Utc};
use uuid::Uuid;

use storefront::booking::{BookingDraft, BookingForm, DATE_FORMAT, Step, effective_max_guests};
use storefront::models::{GuideStore, Tour};

use crate::web::helpers::{about_href, booking_href, initials, store_href, tour_href};

pub const DEFAULT_HERO_COLOR: &str = "#1f2937";

/// Header and footer data shared by every store page.
pub struct StoreChrome {
    pub slug: String,
    pub store_name: String,
    pub logo_url: Option<String>,
    pub initials: String,
    pub home_href: String,
    pub about_href: String,
    pub license_number: Option<String>,
    pub year: i32,
}

impl StoreChrome {
    pub fn new(slug: &str, store: &GuideStore) -> Self {
        let store_name = store.store_name().to_string();
        Self {
            slug: slug.to_string(),
            initials: initials(&store_name),
            store_name,
            logo_url: non_blank(store.store.logo_url.as_deref()),
            home_href: store_href(slug),
            about_href: about_href(slug),
            license_number: non_blank(store.guide.license_number.as_deref()),
            year: Utc::now().year(),
        }
    }
}

pub struct TourCard {
    pub title: String,
    pub href: String,
    pub cover_image: Option<String>,
    pub price_label: String,
}

impl TourCard {
    pub fn new(slug: &str, tour: &Tour) -> Self {
        Self {
            title: tour.title.clone(),
            href: tour_href(slug, &tour.id),
            cover_image: non_blank(tour.cover_image.as_deref()),
            price_label: tour.price_label(),
        }
    }

    pub fn gallery(slug: &str, tours: &[Tour]) -> Vec<Self> {
        tours.iter().map(|t| Self::new(slug, t)).collect()
    }
}

pub struct ItineraryItem {
    pub label: String,
    pub title: String,
    pub description: String,
}

/// Everything the tour detail page shows apart from the booking section.
pub struct TourDetail {
    pub id: String,
    pub title: String,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub duration: String,
    pub max_guests: u32,
    pub price_label: String,
    pub itinerary: Vec<ItineraryItem>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl From<&Tour> for TourDetail {
    fn from(tour: &Tour) -> Self {
        Self {
            id: tour.id.clone(),
            title: tour.title.clone(),
            cover_image: non_blank(tour.cover_image.as_deref()),
            description: non_blank(tour.description.as_deref()),
            duration: tour.duration.to_string(),
            max_guests: tour.max_guests,
            price_label: tour.price_label(),
            itinerary: tour
                .itinerary_days
                .iter()
                .map(|day| ItineraryItem {
                    label: day.label(),
                    title: day.title.clone(),
                    description: day.description.clone(),
                })
                .collect(),
            includes: tour.includes.clone(),
            excludes: tour.excludes.clone(),
        }
    }
}

/// The booking section in whatever state the form is in.
pub struct BookingView {
    pub form_id: String,
    pub action_href: String,
    pub step: u8,
    pub step_label: String,
    pub error: Option<String>,
    pub submitting: bool,
    pub succeeded: bool,
    pub draft: BookingDraft,
    pub max_guests: u32,
    pub min_date: String,
}

impl BookingView {
    pub fn new(form_id: Uuid, slug: &str, tour_id: &str, form: &BookingForm) -> Self {
        let step = form.step().unwrap_or(Step::Basic);
        Self {
            form_id: form_id.to_string(),
            action_href: booking_href(slug, tour_id),
            step: step.number(),
            step_label: step.to_string(),
            error: form.error().map(str::to_string),
            submitting: form.is_submitting(),
            succeeded: form.is_succeeded(),
            draft: form.draft().clone(),
            max_guests: effective_max_guests(form.max_guests()),
            min_date: min_date(form.today()),
        }
    }
}

fn min_date(today: NaiveDate) -> String {
    today.format(DATE_FORMAT).to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
