//! Configuration for the VenueSync CLI.
//!
//! A TOML file merged with `VENUESYNC_`-prefixed environment variables
//! over built-in defaults. Pricing knobs (tax rate, currency) live here
//! rather than in code so regional deployments don't need a rebuild.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Override for the data directory holding the stored collections.
    pub data_dir: Option<PathBuf>,

    /// Output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Quote pricing knobs.
    #[serde(default)]
    pub pricing: Pricing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            defaults: Defaults::default(),
            pricing: Pricing::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Pricing {
    /// Tax applied to every quote, as a fraction of the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// ISO 4217 display currency.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            currency: default_currency(),
        }
    }
}

fn default_tax_rate() -> f64 {
    0.08
}
fn default_currency() -> String {
    "USD".into()
}

impl Config {
    /// Reject values that would make every quote nonsensical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.pricing.tax_rate) {
            return Err(ConfigError::Validation {
                field: "pricing.tax_rate".into(),
                reason: format!(
                    "expected a fraction in [0, 1), got {}",
                    self.pricing.tax_rate
                ),
            });
        }
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "venuesync", "venuesync").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("venuesync");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit file path (tests, `--config` overrides).
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        // Double underscore separates nesting so underscored keys like
        // `data_dir` survive: VENUESYNC_PRICING__TAX_RATE.
        .merge(Env::prefixed("VENUESYNC_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Load config, returning the defaults if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.pricing.tax_rate, 0.08);
        assert_eq!(config.pricing.currency, "USD");
        assert_eq!(config.defaults.output, "table");
        assert_eq!(config.defaults.color, "auto");
        assert!(config.data_dir.is_none());
        config.validate().expect("defaults validate");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/venues\"\n\n[pricing]\ntax_rate = 0.095\ncurrency = \"CAD\"\n",
        )
        .expect("writes");

        let config = load_config_from(&path).expect("loads");
        assert_eq!(config.pricing.tax_rate, 0.095);
        assert_eq!(config.pricing.currency, "CAD");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/venues")));
        // Unmentioned sections keep their defaults.
        assert_eq!(config.defaults.output, "table");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config_from(&dir.path().join("absent.toml")).expect("loads");
        assert_eq!(config.pricing.tax_rate, 0.08);
    }

    #[test]
    fn out_of_range_tax_rate_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[pricing]\ntax_rate = 1.5\n").expect("writes");

        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.pricing.tax_rate = 0.1;
        save_config_to(&config, &path).expect("saves");

        let back = load_config_from(&path).expect("loads");
        assert_eq!(back.pricing.tax_rate, 0.1);
    }
}
