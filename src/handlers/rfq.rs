use axum::{
    extract::{Form, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    error::Result,
    handlers::AppState,
    models::{CreateRfqRequest, CreatedId, CreatedResponse, RfqRow},
    views,
};

/// Create RFQ handler
pub async fn create_rfq(
    State(state): State<AppState>,
    Json(request): Json<CreateRfqRequest>,
) -> Result<impl IntoResponse> {
    let id = state.marketplace.create_rfq(request).await?;
    let response = CreatedResponse {
        message: format!("RFQ {} created and vendors notified", id),
        id: CreatedId::RfqId(id),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// List all RFQs as positional rows
pub async fn get_rfqs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rfqs = state.marketplace.list_rfqs().await?;
    let rows: Vec<RfqRow> = rfqs.into_iter().map(RfqRow::from).collect();
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn rfq_form() -> Html<String> {
    Html(views::rfq_form_page())
}

/// Create an RFQ from the HTML form, then show the status page
pub async fn rfq_form_submit(
    State(state): State<AppState>,
    Form(request): Form<CreateRfqRequest>,
) -> Result<Redirect> {
    state.marketplace.create_rfq(request).await?;
    Ok(Redirect::to("/status"))
}
