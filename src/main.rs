mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use storefront::api::StorefrontClient;
use storefront::config::StorefrontConfig;

use crate::web::handlers;
use crate::web::middleware::SecurityHeaders;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StorefrontConfig::from_env().map_err(std::io::Error::other)?;
    let client = StorefrontClient::new(&config.api_base, config.cache_ttl)
        .map_err(std::io::Error::other)?;
    log::info!(
        "Serving guide stores from {} (lookup cache {}s)",
        client.base_url(),
        config.cache_ttl.as_secs()
    );

    let state = Data::new(web::AppState::new(Arc::new(client)));
    let static_dir = config.static_dir.clone();

    log::info!("Listening on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .default_service(actix_web::web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
