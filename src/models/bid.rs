use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database bid model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bid {
    pub id: i64,
    pub rfq_id: i64,
    pub vendor_id: i64,
    pub bid_amount: f64,
    pub bid_time: DateTime<Utc>,
}

/// Positional row in table column order, as returned by `GET /get_bids/{rfq_id}`
pub type BidRow = (i64, i64, i64, f64, DateTime<Utc>);

impl From<Bid> for BidRow {
    fn from(bid: Bid) -> Self {
        (bid.id, bid.rfq_id, bid.vendor_id, bid.bid_amount, bid.bid_time)
    }
}

/// Bid submission request
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitBidRequest {
    pub rfq_id: i64,
    pub vendor_id: i64,
    pub bid_amount: f64,
}
