use shared_types::{AppConfig, FeatureFlags, IntakeConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse the contents of `config.toml`. Invalid input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`.
/// Only the first call has effect.
///
/// If the file is missing, all flags are off and intake tuning uses its
/// defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, intake = ?config.intake, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    })
}

/// Loaded feature flags, or all-false defaults before [`load_config`] runs.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        telemetry: false,
        api_docs: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Intake tuning from the loaded config.
pub fn intake_config() -> IntakeConfig {
    load_config().intake
}
