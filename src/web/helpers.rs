use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use chrono::{NaiveDate, Utc};

use crate::web::security::validate_slug;
use crate::web::templates::NotFoundTemplate;

/// Set by the edge router in multi-tenant deployments.
pub const SLUG_HEADER: &str = "x-slug";

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Which store the request is for.
pub fn resolve_slug(req: &HttpRequest, query_slug: Option<&str>) -> Option<String> {
    // Priority: x-slug header -> ?slug= query.
    let header_val = req
        .headers()
        .get(SLUG_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    header_val
        .or_else(|| query_slug.map(str::trim).filter(|s| !s.is_empty()))
        .filter(|s| validate_slug(s))
        .map(str::to_string)
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

pub fn render_page_not_found() -> HttpResponse {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate::page())
}

pub fn render_store_not_found() -> HttpResponse {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate::store())
}

/// `["Arabic, English", "French"]` -> `["Arabic", "English", "French"]`
pub fn split_tags(items: &[String]) -> Vec<String> {
    items
        .iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

const WHATSAPP_COUNTRY_CODE: &str = "966";

/// Click-to-chat link for the guide's phone, if it has any digits.
///
/// Local numbers lose one leading zero and get the Saudi country code.
pub fn whatsapp_url(phone: Option<&str>) -> Option<String> {
    let digits: String = phone?.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let number = if digits.starts_with(WHATSAPP_COUNTRY_CODE) {
        digits
    } else {
        let local = digits.strip_prefix('0').unwrap_or(&digits);
        format!("{WHATSAPP_COUNTRY_CODE}{local}")
    };
    Some(format!("https://wa.me/{number}"))
}

/// Up to two uppercase initials, for stores without a logo.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

pub fn store_href(slug: &str) -> String {
    format!("/?slug={slug}")
}

pub fn about_href(slug: &str) -> String {
    format!("/about?slug={slug}")
}

// Slugs are already restricted to safe characters; tour ids come from the API.
pub fn tour_href(slug: &str, tour_id: &str) -> String {
    format!("/tour/{}?slug={slug}", urlencoding::encode(tour_id))
}

pub fn booking_href(slug: &str, tour_id: &str) -> String {
    format!("/tour/{}/book?slug={slug}", urlencoding::encode(tour_id))
}
