use chrono::Utc;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::{CreateRfqRequest, Rfq},
};

/// RFQ store for database operations
#[derive(Clone)]
pub struct RfqStore {
    pool: DbPool,
}

impl RfqStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert an RFQ stamped with the server clock and return its id
    pub async fn create_rfq(&self, rfq: &CreateRfqRequest) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO rfqs (
                origin, destination, dead_weight, dimensions, material_type, vehicle_size, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&rfq.origin)
        .bind(&rfq.destination)
        .bind(rfq.dead_weight)
        .bind(&rfq.dimensions)
        .bind(&rfq.material_type)
        .bind(&rfq.vehicle_size)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.last_insert_rowid())
    }

    /// Get all RFQs in creation order
    pub async fn get_all_rfqs(&self) -> Result<Vec<Rfq>> {
        let rfqs = sqlx::query_as::<_, Rfq>("SELECT * FROM rfqs ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rfqs)
    }

    /// Get the most recently created RFQs, newest first
    pub async fn get_recent_rfqs(&self, limit: i64) -> Result<Vec<Rfq>> {
        let rfqs = sqlx::query_as::<_, Rfq>("SELECT * FROM rfqs ORDER BY id DESC LIMIT ?")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rfqs)
    }
}
