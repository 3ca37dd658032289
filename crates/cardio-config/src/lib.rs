use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use cardio_core::LabelPolicy;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address in {var}: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("Invalid boolean in {var}: {value}")]
    InvalidFlag { var: &'static str, value: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys & Defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const BIND_ADDR_VAR: &str = "CARDIO_BIND_ADDR";
pub const MODEL_PATH_VAR: &str = "CARDIO_MODEL_PATH";
pub const STRICT_LABELS_VAR: &str = "CARDIO_STRICT_LABELS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MODEL_PATH: &str = "heart_model.json";

// ─────────────────────────────────────────────────────────────────────────────
// Server Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub model_path: PathBuf,
    pub label_policy: LabelPolicy,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`; unset or blank keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = addr.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
            var: BIND_ADDR_VAR,
            value: addr.clone(),
        })?;

        let model_path = get(MODEL_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let strict = match get(STRICT_LABELS_VAR) {
            Some(v) => parse_flag(STRICT_LABELS_VAR, &v)?,
            None => false,
        };
        let label_policy = if strict { LabelPolicy::Strict } else { LabelPolicy::Lenient };

        Ok(Self { bind_addr, model_path, label_policy })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: value.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.model_path, PathBuf::from("heart_model.json"));
        assert_eq!(config.label_policy, LabelPolicy::Lenient);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:5000"),
            (MODEL_PATH_VAR, "/srv/models/heart.json"),
            (STRICT_LABELS_VAR, "Yes"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.model_path, PathBuf::from("/srv/models/heart.json"));
        assert_eq!(config.label_policy, LabelPolicy::Strict);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[(BIND_ADDR_VAR, "  "), (MODEL_PATH_VAR, "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn test_bad_addr() {
        let err = config_from(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr { var: BIND_ADDR_VAR, value: "localhost".into() }
        );
    }

    #[test]
    fn test_bad_flag() {
        let err = config_from(&[(STRICT_LABELS_VAR, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { .. }));
    }
}
