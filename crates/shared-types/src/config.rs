use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_app_name() -> String {
    "Devayu".to_string()
}

fn default_tagline() -> String {
    "Breathing Life into Healthcare".to_string()
}

fn default_splash_delay_ms() -> u64 {
    3000
}

fn default_auth_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            tagline: default_tagline(),
        }
    }
}

/// Artificial delays. Both are single-shot and cancelled with their view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    /// Simulated network latency on sign-in and registration.
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
}

impl TimingConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            auth_delay_ms: default_auth_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Redirect signed-out visitors of protected routes to `/login`.
    #[serde(default = "default_true")]
    pub guard_protected_routes: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            guard_protected_routes: true,
        }
    }
}

/// Top-level structure of `portal.toml`. Every section and field is
/// optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

impl PortalConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents).map_err(|e| AppError::config(e.to_string()))
    }
}
