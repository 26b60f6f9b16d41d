use crate::{ConfigError, ConfigErrorResult, DEFAULT_AVATAR_BASE_URL, DEFAULT_GATEWAY_URL};

use serde::Deserialize;

/// Connection settings for the hosted auth + data service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key. Secret: never logged.
    pub anon_key: Option<String>,
    /// Prefix of the generated avatar stored in place of an uploaded photo
    pub avatar_base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_GATEWAY_URL),
            anon_key: None,
            avatar_base_url: String::from(DEFAULT_AVATAR_BASE_URL),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::gateway("gateway.url must be set"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::gateway(format!(
                "gateway.url must start with http:// or https://, got '{url}'"
            )));
        }

        if self.anon_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            return Err(ConfigError::gateway(
                "gateway.anon_key is set but empty; remove it or provide a key",
            ));
        }

        Ok(())
    }
}
