use axum::{extract::State, response::Html};

use crate::{error::Result, handlers::AppState, views};

pub async fn index() -> Html<String> {
    Html(views::index_page())
}

/// Latest RFQs and bids, newest first
pub async fn status(State(state): State<AppState>) -> Result<Html<String>> {
    let snapshot = state.marketplace.status(state.config.status_limit).await?;
    Ok(Html(views::status_page(&snapshot)))
}

pub async fn health() -> &'static str {
    "ok"
}
