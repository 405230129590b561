use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use uuid::Uuid;

use storefront::booking::{BookingForm, Effect, FormEvent};
use storefront::models::{BookingRequest, Tour};
use storefront::services;

use crate::web::forms::{BookingFormInput, SlugQuery};
use crate::web::helpers::{is_htmx, render, render_page_not_found, resolve_slug, today};
use crate::web::security::new_form_id;
use crate::web::state::AppState;
use crate::web::templates::{BookingSectionTemplate, TourDetailTemplate};
use crate::web::views::{BookingView, StoreChrome, TourDetail};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(tour_detail).service(book_tour);
}

#[get("/tour/{id}")]
pub async fn tour_detail(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SlugQuery>,
) -> impl Responder {
    let tour_id = path.into_inner();
    let Some(slug) = resolve_slug(&req, query.slug.as_deref()) else {
        return render_page_not_found();
    };
    let Some(tour) = services::find_tour(state.api.as_ref(), &slug, &tour_id).await else {
        return render_page_not_found();
    };

    let form = BookingForm::new(tour.max_guests, today());
    let booking = BookingView::new(new_form_id(), &slug, &tour.id, &form);
    tour_page(&state, &slug, &tour, booking).await
}

/// Apply one booking action to the posted form and re-render the section.
#[post("/tour/{id}/book")]
pub async fn book_tour(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SlugQuery>,
    input: web::Form<BookingFormInput>,
) -> impl Responder {
    let tour_id = path.into_inner();
    let Some(slug) = resolve_slug(&req, query.slug.as_deref()) else {
        return render_page_not_found();
    };
    let Some(tour) = services::find_tour(state.api.as_ref(), &slug, &tour_id).await else {
        return render_page_not_found();
    };

    let input = input.into_inner();
    let form_id = input.form_id();
    let mut form = input.replay(tour.max_guests, today());

    if let Some(Effect::SendBooking(request)) = form.dispatch(input.action().into()) {
        send_booking(&state, form_id, &slug, &tour.id, &mut form, request).await;
    }

    let booking = BookingView::new(form_id, &slug, &tour.id, &form);
    if is_htmx(&req) {
        return render(BookingSectionTemplate { booking });
    }
    tour_page(&state, &slug, &tour, booking).await
}

async fn send_booking(
    state: &AppState,
    form_id: Uuid,
    slug: &str,
    tour_id: &str,
    form: &mut BookingForm,
    request: BookingRequest,
) {
    // The form stays in `Submitting` until the running request settles.
    let Some(_ticket) = state.in_flight.try_begin(form_id) else {
        log::info!("Booking form {form_id} already has a request in flight");
        return;
    };

    match state.api.book_tour(slug, tour_id, &request).await {
        Ok(()) => {
            form.dispatch(FormEvent::SubmissionSucceeded);
        }
        Err(e) => {
            log::warn!("Booking for tour {tour_id:?} of store {slug:?} failed: {e}");
            form.dispatch(FormEvent::SubmissionFailed(e.user_message()));
        }
    }
}

async fn tour_page(state: &AppState, slug: &str, tour: &Tour, booking: BookingView) -> HttpResponse {
    // The page still renders when only the store lookup fails.
    let store = services::find_guide_store(state.api.as_ref(), slug)
        .await
        .unwrap_or_default();

    render(TourDetailTemplate {
        chrome: StoreChrome::new(slug, &store),
        tour: TourDetail::from(tour),
        booking,
    })
}
