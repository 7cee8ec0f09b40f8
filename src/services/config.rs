use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("thresholds must satisfy 0 <= collision < too_close <= perfect_max (got {collision}, {too_close}, {perfect_max})")]
    ThresholdOrder {
        collision: f64,
        too_close: f64,
        perfect_max: f64,
    },
    #[error("clearance margin `{0}` must be a non-negative number")]
    NegativeMargin(&'static str),
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/parkassist/config.toml"))
}

/// Loads `~/.config/parkassist/config.toml`; a missing file means defaults.
pub fn load_config() -> anyhow::Result<ConfigFile> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let cfg: ConfigFile = toml::from_str(&raw)?;
    validate(&cfg)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

pub fn validate(cfg: &ConfigFile) -> Result<(), ConfigError> {
    let t = &cfg.thresholds;
    let ordered = t.collision >= 0.0 && t.collision < t.too_close && t.too_close <= t.perfect_max;
    if !ordered {
        return Err(ConfigError::ThresholdOrder {
            collision: t.collision,
            too_close: t.too_close,
            perfect_max: t.perfect_max,
        });
    }
    let c = &cfg.clearance;
    if c.parallel_margin.is_nan() || c.parallel_margin < 0.0 {
        return Err(ConfigError::NegativeMargin("parallel_margin"));
    }
    if c.perpendicular_margin.is_nan() || c.perpendicular_margin < 0.0 {
        return Err(ConfigError::NegativeMargin("perpendicular_margin"));
    }
    Ok(())
}
