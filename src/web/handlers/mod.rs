pub mod store;
pub mod tour;

use actix_web::{HttpResponse, web};

use crate::web::helpers::render_page_not_found;

pub fn configure(cfg: &mut web::ServiceConfig) {
    store::configure(cfg);
    tour::configure(cfg);
}

/// Default service for every unmatched route.
pub async fn not_found() -> HttpResponse {
    render_page_not_found()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use actix_web::{App, test};
    use async_trait::async_trait;

    use storefront::api::StorefrontApi;
    use storefront::common::FetchError;
    use storefront::models::{BookingRequest, Guide, GuideStore, ItineraryDay, Store, Tour};

    use super::*;
    use crate::web::AppState;

    const FUTURE_DATE: &str = "2099-01-01";

    /// In-memory API with a scripted booking outcome.
    struct FakeApi {
        store: Option<GuideStore>,
        tours: Vec<Tour>,
        booking_error: Option<String>,
        bookings: Mutex<Vec<BookingRequest>>,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                store: Some(guide_store()),
                tours: vec![tour()],
                booking_error: None,
                bookings: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl StorefrontApi for FakeApi {
        async fn guide_store(&self, slug: &str) -> Result<GuideStore, FetchError> {
            match &self.store {
                Some(store) if slug == "ahmed" => Ok(store.clone()),
                _ => Err(FetchError::Status {
                    status: 404,
                    message: None,
                }),
            }
        }

        async fn tours(&self, slug: &str) -> Result<Vec<Tour>, FetchError> {
            if slug == "ahmed" {
                Ok(self.tours.clone())
            } else {
                Err(FetchError::Unsuccessful(format!("tours of {slug:?}")))
            }
        }

        async fn book_tour(
            &self,
            _slug: &str,
            _tour_id: &str,
            request: &BookingRequest,
        ) -> Result<(), FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bookings.lock().unwrap().push(request.clone());
            match &self.booking_error {
                Some(message) => Err(FetchError::Status {
                    status: 409,
                    message: Some(message.clone()),
                }),
                None => Ok(()),
            }
        }
    }

    fn guide_store() -> GuideStore {
        GuideStore {
            guide: Guide {
                full_name: "Ahmed Al-Harbi".into(),
                store_slug: "ahmed".into(),
                license_number: Some("LIC-7781".into()),
                location: Some("Riyadh".into()),
                bio: None,
                phone: Some("050 123 4567".into()),
                languages: vec!["Arabic, English".into()],
                specialties: vec!["Desert".into()],
                ..Default::default()
            },
            store: Store {
                store_name: "Desert Trails".into(),
                about_text: Some("Small groups, big skies.".into()),
                ..Default::default()
            },
        }
    }

    fn tour() -> Tour {
        Tour {
            id: "edge-1".into(),
            title: "Edge of the World".into(),
            price: 350.0,
            currency: "SAR".into(),
            max_guests: 6,
            duration: 8.0,
            cover_image: None,
            description: None,
            itinerary_days: vec![ItineraryDay {
                day: 1,
                time_label: None,
                title: "Drive to the escarpment".into(),
                description: "Leave Riyadh at dawn.".into(),
            }],
            includes: vec!["Transport".into()],
            excludes: vec![],
        }
    }

    macro_rules! app {
        ($api:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($api)))
                    .configure(configure)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    /// `(status, body)` of one request.
    macro_rules! call {
        ($app:expr, $req:expr) => {{
            let resp = test::call_service(&$app, $req).await;
            let status = resp.status().as_u16();
            let body = test::read_body(resp).await;
            (status, String::from_utf8_lossy(&body).into_owned())
        }};
    }

    fn step1_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("full_name", "Omar Haddad"),
            ("email", "omar@example.com"),
            ("phone", "0501234567"),
            ("tour_date", FUTURE_DATE),
            ("guests", "3"),
            ("is_international", "false"),
        ]
    }

    fn book(fields: &[(&str, &str)], htmx: bool) -> test::TestRequest {
        let mut req = test::TestRequest::post()
            .uri("/tour/edge-1/book?slug=ahmed")
            .set_form(fields);
        if htmx {
            req = req.insert_header(("HX-Request", "true"));
        }
        req
    }

    #[actix_web::test]
    async fn home_without_slug_is_store_not_found() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/").to_request()
        );
        assert_eq!(status, 404);
        assert!(body.contains("Store not found"));
        assert!(body.contains("?slug=ahmed"));
    }

    #[actix_web::test]
    async fn home_with_unknown_store_is_store_not_found() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/?slug=nobody").to_request()
        );
        assert_eq!(status, 404);
        assert!(body.contains("Store not found"));
    }

    #[actix_web::test]
    async fn home_renders_store() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/?slug=ahmed").to_request()
        );
        assert_eq!(status, 200);
        assert!(body.contains("Desert Trails"));
        assert!(body.contains("Meet your guide"));
        assert!(body.contains("Ahmed Al-Harbi"));
        assert!(body.contains("Small groups, big skies."));
        assert!(body.contains("/tour/edge-1?slug=ahmed"));
    }

    #[actix_web::test]
    async fn slug_header_wins_over_query() {
        let app = app!(Arc::new(FakeApi::new()));
        let req = test::TestRequest::get()
            .uri("/?slug=nobody")
            .insert_header(("x-slug", "ahmed"))
            .to_request();
        let (status, _) = call!(app, req);
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn about_shows_tags_and_whatsapp() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/about?slug=ahmed").to_request()
        );
        assert_eq!(status, 200);
        assert!(body.contains(">Arabic<"));
        assert!(body.contains(">English<"));
        assert!(body.contains("https://wa.me/966501234567"));
        assert!(body.contains("No bio available yet."));
        assert!(body.contains("LIC-7781"));
    }

    #[actix_web::test]
    async fn about_without_tours_says_so() {
        let api = FakeApi {
            tours: vec![],
            ..FakeApi::new()
        };
        let app = app!(Arc::new(api));
        let (_, body) = call!(
            app,
            test::TestRequest::get().uri("/about?slug=ahmed").to_request()
        );
        assert!(body.contains("No tours available yet."));
    }

    #[actix_web::test]
    async fn unknown_tour_and_unknown_route_are_404() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/tour/missing?slug=ahmed").to_request()
        );
        assert_eq!(status, 404);
        assert!(body.contains("Page not found"));

        let (status, _) = call!(
            app,
            test::TestRequest::get().uri("/tour/edge-1").to_request()
        );
        assert_eq!(status, 404);

        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/nope").to_request()
        );
        assert_eq!(status, 404);
        assert!(body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn tour_detail_starts_booking_on_step_one() {
        let app = app!(Arc::new(FakeApi::new()));
        let (status, body) = call!(
            app,
            test::TestRequest::get().uri("/tour/edge-1?slug=ahmed").to_request()
        );
        assert_eq!(status, 200);
        assert!(body.contains("Edge of the World"));
        assert!(body.contains("No image"));
        assert!(body.contains("Discover this unique experience with your local guide."));
        assert!(body.contains("Drive to the escarpment"));
        assert!(body.contains("Basic Info"));
        assert!(body.contains("name=\"form_id\""));
    }

    #[actix_web::test]
    async fn next_moves_to_safety_step() {
        let app = app!(Arc::new(FakeApi::new()));
        let mut fields = step1_fields();
        fields.push(("step", "1"));
        fields.push(("action", "next"));

        let (status, body) = call!(app, book(&fields, true).to_request());
        assert_eq!(status, 200);
        assert!(body.contains("Safety Info"));
        assert!(body.contains("Food Allergies"));
        // Fragment only.
        assert!(!body.contains("<html"));
    }

    #[actix_web::test]
    async fn missing_nationality_blocks_step_one() {
        let app = app!(Arc::new(FakeApi::new()));
        let mut fields = step1_fields();
        fields.retain(|(k, _)| *k != "is_international");
        fields.extend([
            ("is_international", "true"),
            ("passport_number", "C01X00T47"),
            ("step", "1"),
            ("action", "next"),
        ]);

        let (_, body) = call!(app, book(&fields, true).to_request());
        assert!(body.contains("Nationality is required"));
        assert!(body.contains("Basic Info"));
    }

    #[actix_web::test]
    async fn successful_submit_shows_confirmation() {
        let api = Arc::new(FakeApi::new());
        let app = app!(api.clone());
        let mut fields = step1_fields();
        fields.extend([
            ("step", "2"),
            ("food_allergies", "   "),
            ("medical_conditions", "asthma"),
            ("action", "submit"),
        ]);

        let (status, body) = call!(app, book(&fields, true).to_request());
        assert_eq!(status, 200);
        assert!(body.contains("Your booking request has been sent!"));

        let sent = api.bookings.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].guests, 3);
        assert_eq!(sent[0].international, None);
        assert_eq!(sent[0].food_allergies, None);
        assert_eq!(sent[0].medical_conditions.as_deref(), Some("asthma"));
    }

    #[actix_web::test]
    async fn failed_submit_keeps_values_and_shows_message() {
        let api = Arc::new(FakeApi {
            booking_error: Some("Tour fully booked".into()),
            ..FakeApi::new()
        });
        let app = app!(api.clone());
        let mut fields = step1_fields();
        fields.extend([("step", "2"), ("food_allergies", "peanuts"), ("action", "submit")]);

        let (_, body) = call!(app, book(&fields, false).to_request());
        assert!(body.contains("Tour fully booked"));
        assert!(body.contains("Safety Info"));
        assert!(body.contains("peanuts"));
        assert!(body.contains("Omar Haddad"));
        // Full page without htmx.
        assert!(body.contains("<html"));
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn submit_from_tampered_step_one_sends_nothing() {
        let api = Arc::new(FakeApi::new());
        let app = app!(api.clone());
        let fields = [
            ("step", "2"),
            ("full_name", "Omar"),
            ("tour_date", FUTURE_DATE),
            ("action", "submit"),
        ];

        let (_, body) = call!(app, book(&fields, true).to_request());
        assert!(body.contains("Email is required"));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn submit_for_a_form_already_in_flight_is_not_resent() {
        let api = Arc::new(FakeApi::new());
        let state = AppState::new(api.clone());
        let form_id = uuid::Uuid::new_v4();
        let _held = state.in_flight.try_begin(form_id).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure),
        )
        .await;
        let form_id = form_id.to_string();
        let mut fields = step1_fields();
        fields.extend([("step", "2"), ("form_id", form_id.as_str()), ("action", "submit")]);

        let (_, body) = call!(app, book(&fields, true).to_request());
        assert!(body.contains("Sending..."));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
