//! Application configuration.
//!
//! Settings come from built-in defaults, an optional TOML file and
//! `AMAZORA__<SECTION>__<KEY>` environment variables, in increasing
//! priority.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::{Easing, FadeTimings};

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum AppConfigError {
    /// An explicitly given configuration file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// The configuration could not be parsed or deserialized.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] ConfigError),

    /// The configuration path is not valid UTF-8.
    #[error("invalid configuration path: {0}")]
    InvalidPath(String),

    /// The effective configuration could not be rendered as TOML.
    #[error("failed to render configuration: {0}")]
    RenderError(#[from] toml::ser::Error),
}

/// Screen fade settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// When false every fade completes instantly
    pub enabled: bool,
    /// Fade-out before a screen swap, in milliseconds
    pub fade_out_ms: u64,
    /// Fade-in after a screen swap, in milliseconds
    pub fade_in_ms: u64,
    /// Fade-in when the app first appears, in milliseconds
    pub entrance_ms: u64,
    /// Easing curve for all fades
    pub easing: Easing,
    /// Redraws per second in the TUI
    pub frame_rate: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fade_out_ms: 300,
            fade_in_ms: 300,
            entrance_ms: 800,
            easing: Easing::EaseInOut,
            frame_rate: 30,
        }
    }
}

impl AnimationConfig {
    /// Fade timings for the navigation controller.
    pub fn timings(&self) -> FadeTimings {
        if !self.enabled {
            return FadeTimings::instant();
        }
        FadeTimings {
            fade_out: Duration::from_millis(self.fade_out_ms),
            fade_in: Duration::from_millis(self.fade_in_ms),
            entrance: Duration::from_millis(self.entrance_ms),
            easing: self.easing,
        }
    }

    /// Interval between TUI frames, never shorter than 1ms.
    ///
    /// A zero frame rate is treated as 1.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64).max(MIN_FRAME_INTERVAL)
    }
}

/// Personalisation shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Name used in the dashboard greeting
    pub display_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "Daniele".to_string(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub animation: AnimationConfig,
    pub profile: ProfileConfig,
}

impl AppConfig {
    /// Load defaults, then `path` if given, then environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is given but does not exist
    /// - `path` is not valid UTF-8
    /// - the file or an override cannot be parsed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use amazora::config::AppConfig;
    ///
    /// let config = AppConfig::load(Some("amazora.toml".as_ref()))?;
    /// assert!(config.animation.frame_rate > 0);
    /// # Ok::<(), amazora::config::AppConfigError>(())
    /// ```
    pub fn load(path: Option<&Path>) -> Result<Self, AppConfigError> {
        Self::load_with_env(path, Environment::with_prefix("AMAZORA"))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, AppConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            let path_str = path
                .to_str()
                .ok_or_else(|| AppConfigError::InvalidPath(format!("{:?}", path)))?;
            if !path.exists() {
                return Err(AppConfigError::FileNotFound(path_str.to_string()));
            }
            builder = builder.add_source(File::new(path_str, FileFormat::Toml));
        }

        let config = builder
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, AppConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix("AMAZORA").source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load_with_env(None, no_env()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.animation.timings(), FadeTimings::default());
        assert_eq!(config.profile.display_name, "Daniele");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::load_with_env(Some(Path::new("/nonexistent/amazora.toml")), no_env())
            .unwrap_err();
        assert!(matches!(err, AppConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[animation]\nfade_out_ms = 120\neasing = \"linear\"\n\n[profile]\ndisplay_name = \"Ana\""
        )
        .unwrap();

        let config = AppConfig::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(config.animation.fade_out_ms, 120);
        assert_eq!(config.animation.fade_in_ms, 300);
        assert_eq!(config.animation.easing, Easing::Linear);
        assert_eq!(config.profile.display_name, "Ana");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[animation]\nfade_in_ms = 500").unwrap();

        let vars = HashMap::from([(
            "AMAZORA__ANIMATION__FADE_IN_MS".to_string(),
            "50".to_string(),
        )]);
        let env = Environment::with_prefix("AMAZORA").source(Some(vars));

        let config = AppConfig::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(config.animation.fade_in_ms, 50);
    }

    #[test]
    fn test_disabled_animation_is_instant() {
        let animation = AnimationConfig {
            enabled: false,
            ..AnimationConfig::default()
        };
        assert_eq!(animation.timings(), FadeTimings::instant());
    }

    #[test]
    fn test_frame_interval() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.frame_interval(), Duration::from_secs_f64(1.0 / 30.0));

        let zero = AnimationConfig {
            frame_rate: 0,
            ..AnimationConfig::default()
        };
        assert_eq!(zero.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_huge_frame_rate_keeps_a_nonzero_interval() {
        let fast = AnimationConfig {
            frame_rate: u32::MAX,
            ..AnimationConfig::default()
        };
        assert_eq!(fast.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_to_toml_lists_sections() {
        let rendered = AppConfig::default().to_toml().unwrap();
        assert!(rendered.contains("[animation]"));
        assert!(rendered.contains("fade_out_ms = 300"));
        assert!(rendered.contains("easing = \"ease-in-out\""));
        assert!(rendered.contains("display_name = \"Daniele\""));
    }
}
