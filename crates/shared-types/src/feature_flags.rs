use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the OpenAPI reference UI at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// Tuning for the exchange intake service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntakeConfig {
    /// Simulated hand-off latency to the valuation desk.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    /// Accepted submissions per client per minute.
    #[serde(default = "default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

fn default_rate_limit_per_minute() -> u32 {
    30
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
            rate_limit_per_minute: default_rate_limit_per_minute(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub intake: IntakeConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.api_docs);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert_eq!(config.intake.simulated_delay_ms, 1500);
        assert_eq!(config.intake.rate_limit_per_minute, 30);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            api_docs = true

            [intake]
            simulated_delay_ms = 0
            "#,
        )
        .unwrap();
        assert!(config.features.api_docs);
        assert!(!config.features.telemetry);
        assert_eq!(config.intake.simulated_delay_ms, 0);
        assert_eq!(config.intake.rate_limit_per_minute, 30);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
