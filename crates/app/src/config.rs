use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Bundled at build time; there is no filesystem on the web target.
const BUNDLED_CONFIG: &str = include_str!("../config.toml");

/// Parse the bundled `config.toml` into the global `OnceLock`.
/// Only the first call has an effect.
///
/// A config that fails to parse is replaced by defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_or_default(BUNDLED_CONFIG);
        tracing::info!(
            signature_and_rating = config.features.signature_and_rating,
            zoom = config.map.zoom,
            "Configuration loaded"
        );
        config
    })
}

fn parse_or_default(contents: &str) -> AppConfig {
    AppConfig::from_toml_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}
