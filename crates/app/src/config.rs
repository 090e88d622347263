use devayu_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `portal.toml` at the workspace root, embedded at build time.
const BUNDLED_CONFIG: &str = include_str!("../../../portal.toml");

/// Parse the bundled config once. A malformed file falls back to defaults
/// with a warning instead of stopping the app.
pub fn load() -> &'static PortalConfig {
    CONFIG.get_or_init(|| parse_or_default(BUNDLED_CONFIG))
}

fn parse_or_default(contents: &str) -> PortalConfig {
    match PortalConfig::from_toml(contents) {
        Ok(config) => {
            tracing::debug!(?config, "portal config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid portal.toml, using defaults");
            PortalConfig::default()
        }
    }
}
