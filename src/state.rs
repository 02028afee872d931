use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::collector::Collector;

#[derive(Clone)]
pub struct AppState {
    pub collector: Arc<Collector>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            collector: Arc::new(Collector::new(config.event_buffer)),
        }
    }
}
