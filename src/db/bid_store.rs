use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{Bid, SubmitBidRequest},
};

/// Bid store for database operations
#[derive(Clone)]
pub struct BidStore {
    pool: DbPool,
}

impl BidStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a bid without checking that the rfq or vendor exists
    pub async fn create_bid(&self, bid: &SubmitBidRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO bids (rfq_id, vendor_id, bid_amount, bid_time)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(bid.rfq_id)
        .bind(bid.vendor_id)
        .bind(bid.bid_amount)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.last_insert_rowid())
    }

    /// Get all bids placed against an RFQ
    pub async fn get_bids_for_rfq(&self, rfq_id: i64) -> Result<Vec<Bid>> {
        let bids = sqlx::query_as::<_, Bid>("SELECT * FROM bids WHERE rfq_id = ? ORDER BY id")
            .bind(rfq_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(bids)
    }

    /// Get the most recent bids across all RFQs, newest first
    pub async fn get_recent_bids(&self, limit: i64) -> Result<Vec<Bid>> {
        let bids = sqlx::query_as::<_, Bid>("SELECT * FROM bids ORDER BY id DESC LIMIT ?")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(bids)
    }
}
