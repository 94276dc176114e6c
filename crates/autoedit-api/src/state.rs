//! Application state shared by all handlers.

use autoedit_core::Config;
use autoedit_infra::PayloadRelay;
use autoedit_storage::WebhookSettings;
use std::sync::Arc;

/// Read-only after startup. Handlers receive it as `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Arc<dyn PayloadRelay>,
    pub settings: WebhookSettings,
}

impl AppState {
    pub fn new(config: Config, relay: Arc<dyn PayloadRelay>, settings: WebhookSettings) -> Self {
        Self {
            config,
            relay,
            settings,
        }
    }
}
