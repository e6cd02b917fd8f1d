//! Runtime configuration for the outlet page.
//!
//! Every field has a default, so a config file only needs the values it overrides.
//! Resolution order: explicit path, then the `OUTLET_CONFIG` environment variable,
//! then `<config dir>/routlet/config.json` if it exists, then built-in defaults.

use crate::coordination::VisibilityThresholds;
use crate::error::{OutletError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "OUTLET_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutletConfig {
    /// Simulated network delay of the demo load, in milliseconds.
    pub load_delay_ms: u64,
    /// The tag bar shows once the first header offset is at most this.
    pub show_threshold: f32,
    /// A visible tag bar hides once the first header offset exceeds this.
    pub hide_threshold: f32,
    /// Active band as `[start, end)`.
    pub active_band: [f32; 2],
    /// Height reserved for the tag bar above the content.
    pub tag_bar_height: f32,
    /// Duration of the scroll-to-section animation, in seconds.
    pub scroll_animation_secs: f32,
    /// Blank space after the last section so it can scroll up to the top.
    pub tail_overscroll: f32,
    /// Initial window size.
    pub window_size: [f32; 2],
}

impl Default for OutletConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 500,
            show_threshold: 0.0,
            hide_threshold: 12.0,
            active_band: [-2.0, 60.0],
            tag_bar_height: 36.0,
            scroll_animation_secs: 0.25,
            tail_overscroll: 400.0,
            window_size: [420.0, 820.0],
        }
    }
}

impl OutletConfig {
    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| OutletError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: OutletConfig =
            serde_json::from_str(&text).map_err(|source| OutletError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        if let Err(err) = config.validate() {
            tracing::warn!("Rejecting config {:?}: {}", path, err);
            return Err(err);
        }
        Ok(config)
    }

    /// Resolves the config to use, falling back to defaults when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => {
                tracing::info!("Loading config from {:?}", path);
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        Self::default_path().filter(|path| path.is_file())
    }

    /// `<config dir>/routlet/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("routlet").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.hide_threshold >= self.show_threshold) {
            return Err(OutletError::InvalidConfig(format!(
                "hide_threshold ({}) must not be below show_threshold ({})",
                self.hide_threshold, self.show_threshold
            )));
        }
        let [start, end] = self.active_band;
        if !(start < end) {
            return Err(OutletError::InvalidConfig(format!(
                "active_band [{}, {}) is empty",
                start, end
            )));
        }
        if !(self.scroll_animation_secs > 0.0) {
            return Err(OutletError::InvalidConfig(
                "scroll_animation_secs must be positive".to_string(),
            ));
        }
        if !(self.tag_bar_height >= 0.0) || !(self.tail_overscroll >= 0.0) {
            return Err(OutletError::InvalidConfig(
                "tag_bar_height and tail_overscroll must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> VisibilityThresholds {
        VisibilityThresholds {
            show: self.show_threshold,
            hide: self.hide_threshold,
            band_start: self.active_band[0],
            band_end: self.active_band[1],
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_thresholds() {
        let config = OutletConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thresholds(), VisibilityThresholds::default());
        assert_eq!(config.load_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "load_delay_ms": 20, "hide_threshold": 16.0 }}"#).unwrap();

        let config = OutletConfig::from_file(file.path()).unwrap();
        assert_eq!(config.load_delay_ms, 20);
        assert_eq!(config.hide_threshold, 16.0);
        assert_eq!(config.tag_bar_height, 36.0);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = OutletConfig {
            show_threshold: 20.0,
            ..OutletConfig::default()
        };
        assert!(matches!(config.validate(), Err(OutletError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_band_rejected() {
        let config = OutletConfig {
            active_band: [10.0, 10.0],
            ..OutletConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "show_threshold": 30.0, "hide_threshold": 12.0 }}"#).unwrap();

        let err = OutletConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, OutletError::InvalidConfig(_)));
        assert!(matches!(
            OutletConfig::load(Some(file.path())),
            Err(OutletError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = OutletConfig::from_file(Path::new("/nonexistent/routlet.json")).unwrap_err();
        assert!(matches!(err, OutletError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = OutletConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, OutletError::Json { .. }));
    }
}
