use actix_web::{HttpRequest, Responder, get, web};

use storefront::models::GuideStore;
use storefront::services;

use crate::web::forms::SlugQuery;
use crate::web::helpers::{
    render, render_page_not_found, render_store_not_found, resolve_slug, split_tags, whatsapp_url,
};
use crate::web::state::AppState;
use crate::web::templates::{AboutTemplate, StoreHomeTemplate};
use crate::web::views::{DEFAULT_HERO_COLOR, StoreChrome, TourCard};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(store_home).service(about);
}

#[get("/")]
pub async fn store_home(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<SlugQuery>,
) -> impl Responder {
    let Some(slug) = resolve_slug(&req, query.slug.as_deref()) else {
        return render_store_not_found();
    };
    let Some(store) = services::find_guide_store(state.api.as_ref(), &slug).await else {
        return render_store_not_found();
    };
    let tours = services::list_tours(state.api.as_ref(), &slug).await;

    render(StoreHomeTemplate {
        chrome: StoreChrome::new(&slug, &store),
        guide_name: store.guide_name().to_string(),
        about_text: store
            .store
            .about_text
            .clone()
            .filter(|t| !t.trim().is_empty()),
        tours: TourCard::gallery(&slug, &tours),
    })
}

#[get("/about")]
pub async fn about(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<SlugQuery>,
) -> impl Responder {
    let Some(slug) = resolve_slug(&req, query.slug.as_deref()) else {
        return render_page_not_found();
    };
    let Some(store) = services::find_guide_store(state.api.as_ref(), &slug).await else {
        return render_page_not_found();
    };
    let tours = services::list_tours(state.api.as_ref(), &slug).await;
    let guide = &store.guide;

    render(AboutTemplate {
        chrome: StoreChrome::new(&slug, &store),
        guide_name: store.guide_name().to_string(),
        location: guide.location.clone().filter(|l| !l.trim().is_empty()),
        bio: guide.bio.clone().filter(|b| !b.trim().is_empty()),
        hero_style: hero_style(&store),
        languages: split_tags(&guide.languages),
        specialties: split_tags(&guide.specialties),
        tours: TourCard::gallery(&slug, &tours),
        whatsapp_url: whatsapp_url(guide.phone.as_deref()),
    })
}

/// Profile picture as the hero background, else the store's brand colour.
fn hero_style(store: &GuideStore) -> String {
    let picture = store
        .guide
        .profile_picture_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty() && is_css_safe(url));
    if let Some(url) = picture {
        return format!(
            "background-image: url('{url}'); background-size: cover; background-position: center;"
        );
    }

    let color = store
        .store
        .primary_color
        .as_deref()
        .map(str::trim)
        .filter(|c| is_hex_color(c))
        .unwrap_or(DEFAULT_HERO_COLOR);
    format!("background-color: {color};")
}

fn is_css_safe(url: &str) -> bool {
    !url.chars()
        .any(|c| matches!(c, '\'' | '"' | '(' | ')' | '\\' | ';' | '<' | '>') || c.is_whitespace())
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
