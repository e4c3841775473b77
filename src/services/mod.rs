pub mod marketplace;
pub mod notifier;
pub mod password;
pub mod uploads;

pub use marketplace::{Marketplace, StatusSnapshot};
pub use notifier::{RfqNotice, RfqNotifier, TracingNotifier};

#[cfg(test)]
pub use notifier::RecordingNotifier;
