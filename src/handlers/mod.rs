use std::sync::Arc;

use crate::{config::Config, services::Marketplace};

pub mod bid;
pub mod pages;
pub mod rfq;
pub mod vendor;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub marketplace: Marketplace,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(marketplace: Marketplace, config: Config) -> Self {
        Self {
            marketplace,
            config: Arc::new(config),
        }
    }
}
