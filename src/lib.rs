pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
mod test;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Largest accepted request body, sized for vendor document uploads
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router with the JSON API and the HTML pages
pub fn app(state: AppState) -> Router {
    use handlers::{bid, pages, rfq, vendor};

    Router::new()
        // JSON API
        .route("/register", post(vendor::register))
        .route("/create_rfq", post(rfq::create_rfq))
        .route("/submit_bid", post(bid::submit_bid))
        .route("/get_rfqs", get(rfq::get_rfqs))
        .route("/get_bids/{rfq_id}", get(bid::get_bids))
        .route("/get_vendors", get(vendor::get_vendors))
        .route("/health", get(pages::health))
        // HTML pages
        .route("/", get(pages::index))
        .route(
            "/vendors",
            get(vendor::quick_registration).post(vendor::quick_registration_submit),
        )
        .route(
            "/vendor_registration",
            get(vendor::vendor_registration).post(vendor::vendor_registration_submit),
        )
        .route("/view_vendors", get(vendor::view_vendors))
        .route("/rfq_form", get(rfq::rfq_form).post(rfq::rfq_form_submit))
        .route("/status", get(pages::status))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
