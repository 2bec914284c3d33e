use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            carousel: CarouselConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Width-triggered layout override.
///
/// Among breakpoints whose `width` is at most the current viewport width,
/// the one with the largest `width` wins for each field independently.
/// Widths are terminal columns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Breakpoint {
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides_to_show: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Base visible-slide count
    #[serde(default = "default_slides_to_show")]
    pub slides_to_show: u32,
    /// Base advance amount per navigation; defaults to `slides_to_show`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
    /// Width-triggered overrides, evaluated ascending by width
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
    /// Wrap-around navigation vs. clamped bounds
    #[serde(default, rename = "loop")]
    pub wrap: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_show: default_slides_to_show(),
            step: None,
            breakpoints: Vec::new(),
            wrap: false,
        }
    }
}

impl CarouselConfig {
    /// Base step, falling back to `slides_to_show` when unset.
    pub fn base_step(&self) -> u32 {
        self.step.unwrap_or(self.slides_to_show)
    }

    /// Reject zero layout values. Duplicate breakpoint widths are not an
    /// error; the last evaluated entry for a matched width wins.
    pub fn validate(&self) -> crate::Result<()> {
        if self.slides_to_show == 0 {
            return Err(crate::Error::Config(
                "slides_to_show must be at least 1".into(),
            ));
        }
        if self.step == Some(0) {
            return Err(crate::Error::Config("step must be at least 1".into()));
        }
        for bp in &self.breakpoints {
            if bp.slides_to_show == Some(0) {
                return Err(crate::Error::Config(format!(
                    "breakpoint {}: slides_to_show must be at least 1",
                    bp.width
                )));
            }
            if bp.step == Some(0) {
                return Err(crate::Error::Config(format!(
                    "breakpoint {}: step must be at least 1",
                    bp.width
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the status bar at the bottom of the screen
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            status_bar: default_true(),
        }
    }
}

/// Key bindings in vim-style notation (see the TUI keymap parser).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_prev")]
    pub prev: String,
    #[serde(default = "default_key_next")]
    pub next: String,
    #[serde(default = "default_key_first")]
    pub first: String,
    #[serde(default = "default_key_last")]
    pub last: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            prev: default_key_prev(),
            next: default_key_next(),
            first: default_key_first(),
            last: default_key_last(),
            help: default_key_help(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/caravel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("caravel")
            .join("config.toml")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_slides_to_show() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_key_quit() -> String {
    "q".to_string()
}

fn default_key_prev() -> String {
    "h".to_string()
}

fn default_key_next() -> String {
    "l".to_string()
}

fn default_key_first() -> String {
    "g".to_string()
}

fn default_key_last() -> String {
    "G".to_string()
}

fn default_key_help() -> String {
    "?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.slides_to_show, 1);
        assert_eq!(config.carousel.base_step(), 1);
        assert!(config.carousel.breakpoints.is_empty());
        assert!(!config.carousel.wrap);
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.status_bar);
    }

    #[test]
    fn test_step_defaults_to_slides_to_show() {
        let config = CarouselConfig {
            slides_to_show: 3,
            ..Default::default()
        };
        assert_eq!(config.base_step(), 3);

        let config = CarouselConfig {
            slides_to_show: 3,
            step: Some(1),
            ..Default::default()
        };
        assert_eq!(config.base_step(), 1);
    }

    #[test]
    fn test_loop_field_name() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            slides_to_show = 2
            loop = true

            [[carousel.breakpoints]]
            width = 120
            slides_to_show = 3
            "#,
        )
        .unwrap();
        assert!(config.carousel.wrap);
        assert_eq!(config.carousel.slides_to_show, 2);
        assert_eq!(config.carousel.breakpoints.len(), 1);
        assert_eq!(config.carousel.breakpoints[0].slides_to_show, Some(3));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = CarouselConfig {
            slides_to_show: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CarouselConfig {
            step: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CarouselConfig {
            breakpoints: vec![Breakpoint {
                width: 100,
                slides_to_show: Some(0),
                step: None,
            }],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_duplicate_breakpoint_widths() {
        let config = CarouselConfig {
            breakpoints: vec![
                Breakpoint {
                    width: 100,
                    slides_to_show: Some(2),
                    step: None,
                },
                Breakpoint {
                    width: 100,
                    slides_to_show: Some(3),
                    step: None,
                },
            ],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
