use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database RFQ model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rfq {
    pub id: i64,
    pub origin: String,
    pub destination: String,
    pub dead_weight: f64,
    pub dimensions: String,
    pub material_type: String,
    pub vehicle_size: String,
    pub created_at: DateTime<Utc>,
}

/// Positional row in table column order, as returned by `GET /get_rfqs`
pub type RfqRow = (
    i64,
    String,
    String,
    f64,
    String,
    String,
    String,
    DateTime<Utc>,
);

impl From<Rfq> for RfqRow {
    fn from(rfq: Rfq) -> Self {
        (
            rfq.id,
            rfq.origin,
            rfq.destination,
            rfq.dead_weight,
            rfq.dimensions,
            rfq.material_type,
            rfq.vehicle_size,
            rfq.created_at,
        )
    }
}

/// RFQ creation request, accepted as JSON or url-encoded form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRfqRequest {
    pub origin: String,
    pub destination: String,
    pub dead_weight: f64,
    pub dimensions: String,
    pub material_type: String,
    pub vehicle_size: String,
}
