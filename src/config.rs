use std::env;
use std::sync::OnceLock;

use tracing::warn;

use crate::error::ConfigError;

pub const MAX_ELEMENTS_VAR: &str = "RANGE_MATCHERS_MAX_ELEMENTS";

const DEFAULT_MAX_ELEMENTS: usize = 5;

/// Controls how much of a range ends up in a matcher description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
  pub max_elements: usize,
}

impl Default for RenderConfig {
  fn default() -> Self {
    RenderConfig {
      max_elements: DEFAULT_MAX_ELEMENTS,
    }
  }
}

impl RenderConfig {
  pub fn from_value(value: &str) -> Result<Self, ConfigError> {
    let max_elements = value.trim().parse().map_err(|source| ConfigError::InvalidValue {
      key: MAX_ELEMENTS_VAR,
      value: value.to_string(),
      source,
    })?;
    Ok(RenderConfig { max_elements })
  }

  pub fn from_env() -> Self {
    match env::var(MAX_ELEMENTS_VAR) {
      Ok(value) => Self::from_value(&value).unwrap_or_else(|error| {
        warn!(%error, "ignoring render configuration, using defaults");
        Self::default()
      }),
      Err(_) => Self::default(),
    }
  }
}

/// Process-wide configuration, read from the environment on first use.
pub fn render() -> &'static RenderConfig {
  static CONFIG: OnceLock<RenderConfig> = OnceLock::new();
  CONFIG.get_or_init(RenderConfig::from_env)
}
