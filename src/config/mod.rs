// SPDX-License-Identifier: MPL-2.0
//! This module handles toast configuration, loading and saving defaults
//! to a `toast.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Defaults applied to new emitters (duration, tap, mode)
//! - `[animation]` - Transition length and tick interval
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//! use iced_toast::toast::{install_coordinator, ContentBox, SystemClock};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let scope = install_coordinator(SystemClock, config.coordinator_options());
//! let emitter = scope.attach_emitter(config.emitter_defaults(ContentBox::new("Saved")));
//! emitter.set_presented(true);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::animation::{TickInterval, TransitionMillis};
use crate::error::{Error, Result};
use crate::toast::{BannerStyle, ContentBox, CoordinatorOptions, DisplayMode, EmitterConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";

/// Warning key returned by [`load`] when an existing file cannot be read.
pub const LOAD_ERROR_WARNING: &str = "toast-config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// Display mode as written in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    #[default]
    Alert,
    Hud,
    BannerSlide,
    BannerPlain,
}

impl From<ModeSetting> for DisplayMode {
    fn from(setting: ModeSetting) -> Self {
        match setting {
            ModeSetting::Alert => DisplayMode::Alert,
            ModeSetting::Hud => DisplayMode::Hud,
            ModeSetting::BannerSlide => DisplayMode::Banner(BannerStyle::Slide),
            ModeSetting::BannerPlain => DisplayMode::Banner(BannerStyle::Plain),
        }
    }
}

impl From<DisplayMode> for ModeSetting {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Alert => ModeSetting::Alert,
            DisplayMode::Hud => ModeSetting::Hud,
            DisplayMode::Banner(BannerStyle::Slide) => ModeSetting::BannerSlide,
            DisplayMode::Banner(BannerStyle::Plain) => ModeSetting::BannerPlain,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults applied to new emitters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds (0 = until tapped or cleared).
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u32>,

    /// Whether tapping a toast dismisses it.
    #[serde(
        default = "default_tap_to_dismiss",
        skip_serializing_if = "Option::is_none"
    )]
    pub tap_to_dismiss: Option<bool>,

    /// Display mode for new emitters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<ModeSetting>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration_ms(),
            tap_to_dismiss: default_tap_to_dismiss(),
            default_mode: Some(ModeSetting::default()),
        }
    }
}

/// Animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Enter/exit transition length in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u32>,

    /// Interval between coordinator ticks in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Toast configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Emitter defaults.
    #[serde(default)]
    pub toast: ToastConfig,

    /// Animation timing.
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Returns the transition length, clamped to its valid range.
    #[must_use]
    pub fn transition(&self) -> TransitionMillis {
        self.animation
            .transition_ms
            .map_or_else(TransitionMillis::default, TransitionMillis::new)
    }

    /// Returns the tick interval, clamped to its valid range.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.animation
            .tick_interval_ms
            .map_or_else(TickInterval::default, TickInterval::new)
    }

    /// Builds coordinator options from the animation section.
    #[must_use]
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            transition_duration: self.transition().as_duration(),
        }
    }

    /// Builds an emitter configuration for `content` from the toast section.
    #[must_use]
    pub fn emitter_defaults(&self, content: ContentBox) -> EmitterConfig {
        let duration_ms = self
            .toast
            .default_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);
        EmitterConfig::new(content)
            .with_mode(self.toast.default_mode.unwrap_or_default().into())
            .with_duration(Duration::from_millis(u64::from(duration_ms)))
            .tap_to_dismiss(self.toast.tap_to_dismiss.unwrap_or(DEFAULT_TAP_TO_DISMISS))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_duration_ms() -> Option<u32> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_tap_to_dismiss() -> Option<bool> {
    Some(DEFAULT_TAP_TO_DISMISS)
}

fn default_transition_ms() -> Option<u32> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_tick_interval_ms() -> Option<u32> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default toast config");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toast: ToastConfig {
                default_duration_ms: Some(4500),
                tap_to_dismiss: Some(false),
                default_mode: Some(ModeSetting::BannerPlain),
            },
            animation: AnimationConfig {
                transition_ms: Some(400),
                tick_interval_ms: Some(33),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast]\ndefault_mode = 7")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[toast]\ndefault_mode = \"hud\"\n")
            .expect("partial config should parse");

        assert_eq!(config.toast.default_mode, Some(ModeSetting::Hud));
        assert_eq!(
            config.toast.default_duration_ms,
            Some(DEFAULT_TOAST_DURATION_MS)
        );
        assert_eq!(config.animation, AnimationConfig::default());
    }

    #[test]
    fn mode_settings_use_kebab_case() {
        let config: Config = toml::from_str("[toast]\ndefault_mode = \"banner-slide\"\n")
            .expect("kebab-case mode should parse");
        assert_eq!(config.toast.default_mode, Some(ModeSetting::BannerSlide));
    }

    #[test]
    fn mode_setting_maps_to_display_mode_and_back() {
        for setting in [
            ModeSetting::Alert,
            ModeSetting::Hud,
            ModeSetting::BannerSlide,
            ModeSetting::BannerPlain,
        ] {
            let mode: DisplayMode = setting.into();
            assert_eq!(ModeSetting::from(mode), setting);
        }
    }

    #[test]
    fn out_of_range_animation_values_are_clamped() {
        let config = Config {
            animation: AnimationConfig {
                transition_ms: Some(60_000),
                tick_interval_ms: Some(0),
            },
            ..Config::default()
        };

        assert_eq!(config.transition().value(), MAX_TRANSITION_MS);
        assert_eq!(config.tick_interval().value(), MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn emitter_defaults_follow_toast_section() {
        let config = Config {
            toast: ToastConfig {
                default_duration_ms: Some(0),
                tap_to_dismiss: Some(false),
                default_mode: Some(ModeSetting::Hud),
            },
            ..Config::default()
        };

        let emitter = config.emitter_defaults(ContentBox::default());

        assert_eq!(emitter.mode, DisplayMode::Hud);
        assert_eq!(emitter.duration, Duration::ZERO);
        assert!(!emitter.tap_to_dismiss);
    }

    #[test]
    fn coordinator_options_use_transition_length() {
        let config = Config {
            animation: AnimationConfig {
                transition_ms: Some(100),
                tick_interval_ms: None,
            },
            ..Config::default()
        };

        assert_eq!(
            config.coordinator_options().transition_duration,
            Duration::from_millis(100)
        );
    }
}
