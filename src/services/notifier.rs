use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Notice announcing a new RFQ to a single vendor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RfqNotice {
    pub email: String,
    pub rfq_id: i64,
}

impl RfqNotice {
    pub fn message(&self) -> String {
        format!("New RFQ ID {} available for bidding.", self.rfq_id)
    }
}

/// Outbound channel for RFQ announcements
#[async_trait]
pub trait RfqNotifier: Send + Sync {
    async fn notify(&self, notice: &RfqNotice) -> Result<()>;
}

/// Notifier that only emits a log event per vendor
pub struct TracingNotifier;

#[async_trait]
impl RfqNotifier for TracingNotifier {
    async fn notify(&self, notice: &RfqNotice) -> Result<()> {
        tracing::info!(
            email = %notice.email,
            rfq_id = notice.rfq_id,
            "Notification sent to {}: {}",
            notice.email,
            notice.message()
        );
        Ok(())
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;
