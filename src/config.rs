use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::GestureConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub gesture: GestureSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Container width the headless probe assumes; the real UI passes its own
    #[serde(default = "default_container_width")]
    pub container_width: f32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            container_width: default_container_width(),
        }
    }
}

fn default_page_size() -> usize { 20 }
fn default_container_width() -> f32 { 375.0 }

/// Gesture tunables; defaults match the shipped discovery screen
#[derive(Debug, Clone, Deserialize)]
pub struct GestureSettings {
    #[serde(default = "default_commit_fraction")]
    pub commit_fraction: f32,
    #[serde(default = "default_rotation_per_px")]
    pub rotation_per_px: f32,
    #[serde(default = "default_max_rotation_deg")]
    pub max_rotation_deg: f32,
    #[serde(default = "default_fade_fraction")]
    pub fade_fraction: f32,
    #[serde(default = "default_min_opacity")]
    pub min_opacity: f32,
    #[serde(default = "default_pressed_scale")]
    pub pressed_scale: f32,
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: u64,
}

impl GestureSettings {
    pub fn to_config(&self) -> GestureConfig {
        GestureConfig {
            commit_fraction: self.commit_fraction,
            rotation_per_px: self.rotation_per_px,
            max_rotation_deg: self.max_rotation_deg,
            fade_fraction: self.fade_fraction,
            min_opacity: self.min_opacity,
            pressed_scale: self.pressed_scale,
            exit_duration_ms: self.exit_duration_ms,
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            commit_fraction: default_commit_fraction(),
            rotation_per_px: default_rotation_per_px(),
            max_rotation_deg: default_max_rotation_deg(),
            fade_fraction: default_fade_fraction(),
            min_opacity: default_min_opacity(),
            pressed_scale: default_pressed_scale(),
            exit_duration_ms: default_exit_duration_ms(),
        }
    }
}

fn default_commit_fraction() -> f32 { 0.25 }
fn default_rotation_per_px() -> f32 { 0.05 }
fn default_max_rotation_deg() -> f32 { 15.0 }
fn default_fade_fraction() -> f32 { 0.4 }
fn default_min_opacity() -> f32 { 0.8 }
fn default_pressed_scale() -> f32 { 0.95 }
fn default_exit_duration_ms() -> u64 { 250 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_ttl_secs() -> u64 { 300 }
fn default_cache_capacity() -> u64 { 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with STUDYMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., STUDYMATCH__FEED__PAGE_SIZE -> feed.page_size
            .add_source(
                Environment::with_prefix("STUDYMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("STUDYMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn gesture_config(&self) -> GestureConfig {
        self.gesture.to_config()
    }
}

/// Honor the plain env var names the mobile builds already use
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL")
        .or_else(|_| env::var("STUDYMATCH__SUPABASE__URL"))
        .ok();
    let supabase_anon_key = env::var("SUPABASE_ANON_KEY")
        .or_else(|_| env::var("STUDYMATCH__SUPABASE__ANON_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(anon_key) = supabase_anon_key {
        builder = builder.set_override("supabase.anon_key", anon_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gesture_settings() {
        let gesture = GestureSettings::default();

        assert_eq!(gesture.commit_fraction, 0.25);
        assert_eq!(gesture.rotation_per_px, 0.05);
        assert_eq!(gesture.max_rotation_deg, 15.0);
        assert_eq!(gesture.min_opacity, 0.8);
        assert_eq!(gesture.exit_duration_ms, 250);
    }

    #[test]
    fn test_gesture_settings_to_config() {
        let config = GestureSettings::default().to_config();

        assert_eq!(config.commit_fraction, 0.25);
        assert_eq!(config.exit_duration_ms, 250);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();

        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_feed_settings() {
        let feed = FeedSettings::default();

        assert_eq!(feed.page_size, 20);
        assert_eq!(feed.container_width, 375.0);
    }
}
