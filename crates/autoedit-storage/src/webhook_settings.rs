//! Last-used webhook URL, persisted between sessions.

use autoedit_core::constants::{USER_SETTINGS_KEY, WEBHOOK_URL_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::traits::{SettingsStore, StorageResult};

/// Settings record stored as JSON under the user-settings key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct WebhookSettings {
    store: Arc<dyn SettingsStore>,
}

impl WebhookSettings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Store `url` and stamp the save time. Surrounding whitespace is dropped.
    pub async fn save_webhook_url(&self, url: &str) -> StorageResult<UserSettings> {
        let url = url.trim();
        let settings = UserSettings {
            webhook_url: Some(url.to_string()),
            saved_at: Some(Utc::now()),
        };

        self.store.set(WEBHOOK_URL_KEY, url).await?;
        self.store
            .set(USER_SETTINGS_KEY, &serde_json::to_string(&settings)?)
            .await?;

        tracing::info!(webhook_url = %url, "Webhook URL saved");
        Ok(settings)
    }

    pub async fn get_webhook_url(&self) -> StorageResult<Option<String>> {
        Ok(self
            .store
            .get(WEBHOOK_URL_KEY)
            .await?
            .filter(|url| !url.trim().is_empty()))
    }

    /// Saved settings record. An unreadable record reads as empty settings.
    pub async fn get_user_settings(&self) -> StorageResult<UserSettings> {
        let Some(raw) = self.store.get(USER_SETTINGS_KEY).await? else {
            return Ok(UserSettings::default());
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable user settings");
                Ok(UserSettings::default())
            }
        }
    }

    pub async fn clear_webhook_url(&self) -> StorageResult<()> {
        self.store.remove(WEBHOOK_URL_KEY).await?;
        self.store.remove(USER_SETTINGS_KEY).await?;
        tracing::info!("Webhook URL cleared");
        Ok(())
    }

    pub async fn has_saved_webhook_url(&self) -> StorageResult<bool> {
        Ok(self.get_webhook_url().await?.is_some())
    }
}

impl std::fmt::Debug for WebhookSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSettings")
            .field("backend", &self.store.backend_name())
            .finish()
    }
}
