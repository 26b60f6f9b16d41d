use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEV_ROUTES, DEFAULT_LOGIN_REDIRECT_SECS,
    DEFAULT_REGISTRATION_REDIRECT_SECS, DEFAULT_REPORT_REDIRECT_SECS, MAX_REDIRECT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Behaviour of the view layer: post-submit redirects and the dev route table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before leaving a report form after a successful submission
    pub report_redirect_secs: u64,
    /// Delay before moving from registration to the login page
    pub registration_redirect_secs: u64,
    pub login_redirect_secs: u64,
    /// Mounts the development-only route table
    pub dev_routes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_redirect_secs: DEFAULT_REPORT_REDIRECT_SECS,
            registration_redirect_secs: DEFAULT_REGISTRATION_REDIRECT_SECS,
            login_redirect_secs: DEFAULT_LOGIN_REDIRECT_SECS,
            dev_routes: DEFAULT_DEV_ROUTES,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value, min) in [
            ("app.report_redirect_secs", self.report_redirect_secs, 1),
            (
                "app.registration_redirect_secs",
                self.registration_redirect_secs,
                1,
            ),
            ("app.login_redirect_secs", self.login_redirect_secs, 0),
        ] {
            if value < min || value > MAX_REDIRECT_SECS {
                return Err(ConfigError::app(format!(
                    "{name} must be {min}-{MAX_REDIRECT_SECS}, got {value}"
                )));
            }
        }

        Ok(())
    }

    pub fn report_redirect(&self) -> Duration {
        Duration::from_secs(self.report_redirect_secs)
    }

    pub fn registration_redirect(&self) -> Duration {
        Duration::from_secs(self.registration_redirect_secs)
    }

    pub fn login_redirect(&self) -> Duration {
        Duration::from_secs(self.login_redirect_secs)
    }
}
