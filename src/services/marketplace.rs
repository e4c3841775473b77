use std::sync::Arc;

use crate::{
    db::{BidStore, DbPool, RfqStore, VendorStore},
    error::{AppError, Result},
    models::{Bid, CreateRfqRequest, NewVendor, Rfq, SubmitBidRequest, VendorDto},
    services::{
        notifier::{RfqNotice, RfqNotifier},
        password::hash_password,
    },
};

/// Most recent RFQs and bids shown on the status page
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub recent_rfqs: Vec<Rfq>,
    pub recent_bids: Vec<Bid>,
}

/// Vendor, RFQ and bid operations shared by the JSON API and the HTML pages
#[derive(Clone)]
pub struct Marketplace {
    vendor_store: VendorStore,
    rfq_store: RfqStore,
    bid_store: BidStore,
    notifier: Arc<dyn RfqNotifier>,
}

impl Marketplace {
    pub fn new(pool: DbPool, notifier: Arc<dyn RfqNotifier>) -> Self {
        Self {
            vendor_store: VendorStore::new(pool.clone()),
            rfq_store: RfqStore::new(pool.clone()),
            bid_store: BidStore::new(pool),
            notifier,
        }
    }

    /// Register a vendor, storing only a hash of the password
    pub async fn register_vendor(&self, vendor: NewVendor) -> Result<i64> {
        let password_hash = hash_password(&vendor.password)?;
        let id = self.vendor_store.create_vendor(&vendor, &password_hash).await?;
        tracing::info!("Registered vendor {} ({})", id, vendor.email);
        Ok(id)
    }

    /// Create an RFQ and announce it to every registered vendor
    pub async fn create_rfq(&self, rfq: CreateRfqRequest) -> Result<i64> {
        ensure_finite("dead_weight", rfq.dead_weight)?;
        let rfq_id = self.rfq_store.create_rfq(&rfq).await?;
        tracing::info!("Created RFQ {}: {} -> {}", rfq_id, rfq.origin, rfq.destination);

        // The RFQ is stored at this point, so a failed lookup only skips notices
        let emails = match self.vendor_store.get_all_emails().await {
            Ok(emails) => emails,
            Err(e) => {
                tracing::warn!("Failed to load vendor emails for RFQ {}: {}", rfq_id, e);
                Vec::new()
            }
        };
        for email in emails {
            let notice = RfqNotice { email, rfq_id };
            if let Err(e) = self.notifier.notify(&notice).await {
                tracing::warn!("Failed to notify {} about RFQ {}: {}", notice.email, rfq_id, e);
            }
        }

        Ok(rfq_id)
    }

    /// Record a bid; the referenced rfq and vendor are not checked
    pub async fn submit_bid(&self, bid: SubmitBidRequest) -> Result<i64> {
        ensure_finite("bid_amount", bid.bid_amount)?;
        let id = self.bid_store.create_bid(&bid).await?;
        tracing::info!(
            "Vendor {} bid {} on RFQ {} (bid {})",
            bid.vendor_id,
            bid.bid_amount,
            bid.rfq_id,
            id
        );
        Ok(id)
    }

    pub async fn list_rfqs(&self) -> Result<Vec<Rfq>> {
        self.rfq_store.get_all_rfqs().await
    }

    pub async fn list_bids(&self, rfq_id: i64) -> Result<Vec<Bid>> {
        self.bid_store.get_bids_for_rfq(rfq_id).await
    }

    /// All vendors, without their password hashes
    pub async fn list_vendors(&self) -> Result<Vec<VendorDto>> {
        let vendors = self.vendor_store.get_all_vendors().await?;
        Ok(vendors.into_iter().map(VendorDto::from).collect())
    }

    pub async fn status(&self, limit: i64) -> Result<StatusSnapshot> {
        Ok(StatusSnapshot {
            recent_rfqs: self.rfq_store.get_recent_rfqs(limit).await?,
            recent_bids: self.bid_store.get_recent_bids(limit).await?,
        })
    }
}

/// SQLite stores NaN as NULL and JSON has no infinity, so both are rejected
fn ensure_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("{} must be a finite number", field)))
    }
}
