//! Serializable plan configuration.
//!
//! A plan can be described in a TOML file instead of CLI flags:
//!
//! ```toml
//! [plan]
//! num_trades = 10
//! profit_pct = 2.0
//! desired_profit = 50.0
//! currency = "EUR"      # optional, display only
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stakeplan_core::{ParamError, PlanParams};
use thiserror::Error;

/// Errors loading or validating a plan config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Params(#[from] ParamError),
}

/// Top-level config: a single `[plan]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub plan: PlanSection,
}

/// The `[plan]` table of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSection {
    pub num_trades: u32,
    pub profit_pct: f64,
    pub desired_profit: f64,
    /// Display currency code for rendered output. Never affects the math.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl PlanConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parse and validate, so a bad file fails at load time rather than
    /// at generation time.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.params()?;
        Ok(config)
    }

    /// Validated core parameters.
    pub fn params(&self) -> Result<PlanParams, ParamError> {
        PlanParams::new(
            self.plan.num_trades,
            self.plan.profit_pct,
            self.plan.desired_profit,
        )
    }

    /// Deterministic content hash of this config (hex).
    ///
    /// Two identical configs share a plan id, so artifact directories are
    /// recognizable across runs.
    pub fn plan_id(&self) -> String {
        let json = serde_json::to_string(self).expect("PlanConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[plan]
num_trades = 3
profit_pct = 10.0
desired_profit = 100.0
"#;

    #[test]
    fn parses_minimal_config_with_default_currency() {
        let config = PlanConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.plan.num_trades, 3);
        assert_eq!(config.plan.profit_pct, 10.0);
        assert_eq!(config.plan.currency, "EUR");
    }

    #[test]
    fn explicit_currency_is_kept() {
        let raw = r#"
[plan]
num_trades = 5
profit_pct = 2.0
desired_profit = 50.0
currency = "USD"
"#;
        let config = PlanConfig::from_toml(raw).unwrap();
        assert_eq!(config.plan.currency, "USD");
    }

    #[test]
    fn invalid_params_fail_at_load_time() {
        let raw = r#"
[plan]
num_trades = 0
profit_pct = 10.0
desired_profit = 100.0
"#;
        let err = PlanConfig::from_toml(raw).unwrap_err();
        assert!(matches!(err, ConfigError::Params(ParamError::ZeroTrades)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PlanConfig::from_toml("not toml at all [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = PlanConfig::from_file(Path::new("/nonexistent/plan.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn plan_id_is_deterministic_and_content_sensitive() {
        let a = PlanConfig::from_toml(SAMPLE).unwrap();
        let b = PlanConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(a.plan_id(), b.plan_id());

        let mut c = a.clone();
        c.plan.num_trades = 4;
        assert_ne!(a.plan_id(), c.plan_id());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = PlanConfig::from_toml(SAMPLE).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = PlanConfig::from_toml(&serialized).unwrap();
        assert_eq!(config, reparsed);
    }
}
