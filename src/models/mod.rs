pub mod bid;
pub mod rfq;
pub mod vendor;

pub use bid::{Bid, BidRow, SubmitBidRequest};
pub use rfq::{CreateRfqRequest, Rfq, RfqRow};
pub use vendor::{NewVendor, RegisterVendorRequest, Vendor, VendorDto, VendorProfile};

use serde::Serialize;

/// Acknowledgement returned by the mutating JSON endpoints
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    #[serde(flatten)]
    pub id: CreatedId,
}

/// Identity of a freshly inserted row, keyed by entity
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatedId {
    VendorId(i64),
    RfqId(i64),
    BidId(i64),
}
