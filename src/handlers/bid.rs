use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::Result,
    handlers::AppState,
    models::{BidRow, CreatedId, CreatedResponse, SubmitBidRequest},
};

/// Submit bid handler
pub async fn submit_bid(
    State(state): State<AppState>,
    Json(request): Json<SubmitBidRequest>,
) -> Result<impl IntoResponse> {
    let id = state.marketplace.submit_bid(request).await?;
    let response = CreatedResponse {
        message: "Bid submitted successfully".to_string(),
        id: CreatedId::BidId(id),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// List bids for an RFQ as positional rows
pub async fn get_bids(
    State(state): State<AppState>,
    Path(rfq_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let bids = state.marketplace.list_bids(rfq_id).await?;
    let rows: Vec<BidRow> = bids.into_iter().map(BidRow::from).collect();
    Ok((StatusCode::OK, Json(rows)))
}
