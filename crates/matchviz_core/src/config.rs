//! # Viz Configuration
//!
//! Tunables for a playback session. Every field has a default, so a YAML
//! file only needs the keys it overrides.
//!
//! ```rust
//! use matchviz_core::config::VizConfig;
//!
//! let config = VizConfig::default();
//! let debug = VizConfig::debug();
//! assert!(debug.emit_all_events && !config.emit_all_events);
//! ```

use crate::stats::DEFAULT_GOAL_MIN_ABS_X;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_REFEREE_NAME: &str = "REFEREE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VizConfig {
    /// Minimum |x| of a goal location (default: 50.0)
    pub goal_min_abs_x: f64,
    /// Pseudo-player name used for the referee in frames
    pub referee_name: String,
    /// Hand every event to the sink, not only those carrying players
    pub emit_all_events: bool,
    /// Replaces the dataset's `fps` when set
    pub fps_override: Option<f64>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            goal_min_abs_x: DEFAULT_GOAL_MIN_ABS_X,
            referee_name: DEFAULT_REFEREE_NAME.to_string(),
            emit_all_events: false,
            fps_override: None,
        }
    }
}

impl VizConfig {
    /// Every event reaches the sink
    pub fn debug() -> Self {
        Self { emit_all_events: true, ..Self::default() }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.goal_min_abs_x.is_finite() && self.goal_min_abs_x >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "goal_min_abs_x must be a non-negative number, got {}",
                self.goal_min_abs_x
            )));
        }
        if let Some(fps) = self.fps_override {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "fps_override must be positive, got {}",
                    fps
                )));
            }
        }
        Ok(())
    }

    /// Frame rate to use for `dataset_fps`.
    pub fn effective_fps(&self, dataset_fps: f64) -> f64 {
        self.fps_override.unwrap_or(dataset_fps)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let cfg = VizConfig::default();
        assert_eq!(cfg.goal_min_abs_x, 50.0);
        assert_eq!(cfg.referee_name, "REFEREE");
        assert!(!cfg.emit_all_events);
        assert_eq!(cfg.effective_fps(25.0), 25.0);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg = VizConfig::from_yaml_str("fps_override: 30.0\n").unwrap();
        assert_eq!(cfg.effective_fps(25.0), 30.0);
        assert_eq!(cfg.goal_min_abs_x, 50.0);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fps_override: -1.0").unwrap();
        let err = VizConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "referee_name: REF\nemit_all_events: true").unwrap();
        let cfg = VizConfig::load(file.path()).unwrap();
        assert_eq!(cfg.referee_name, "REF");
        assert!(cfg.emit_all_events);
    }
}
