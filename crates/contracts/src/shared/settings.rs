//! Application settings.
//!
//! Business thresholds and UI timings live here instead of being scattered
//! through the pages as literals. A default TOML document is embedded; a
//! deployment may supply its own document (see `frontend::shared::config`).

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("complaint_number_min_len ({min}) exceeds complaint_number_max_len ({max})")]
    ComplaintBounds { min: usize, max: usize },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub validation: ValidationThresholds,
    pub chart: ChartTiming,
    pub ui: UiTiming,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiSettings {
    /// Origin every endpoint path is appended to, with trailing slash.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ValidationThresholds {
    /// Vendor other-cost may not exceed this share of the customer other-cost.
    pub vendor_other_cost_ratio: f64,
    /// Rewinding-cost floor used when a record carries no base cost.
    pub default_rewinding_base_cost: f64,
    pub complaint_number_min_len: usize,
    pub complaint_number_max_len: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ChartTiming {
    /// Offset between the first segment of consecutive divisions.
    pub division_stagger_ms: u32,
    /// Offset between consecutive segments of one division.
    pub segment_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct UiTiming {
    /// Delay before reloading the page after a successful mutation.
    pub reload_delay_ms: u32,
    pub complaint_reload_delay_ms: u32,
    pub toast_dismiss_ms: u32,
}

/// Default settings embedded in the bundle
pub const DEFAULT_SETTINGS: &str = r#"
[api]
base_url = "http://localhost:8000/"

[validation]
vendor_other_cost_ratio = 0.8
default_rewinding_base_cost = 0.0
complaint_number_min_len = 13
complaint_number_max_len = 15

[chart]
division_stagger_ms = 200
segment_delay_ms = 300

[ui]
reload_delay_ms = 1500
complaint_reload_delay_ms = 800
toast_dismiss_ms = 4000
"#;

impl AppSettings {
    /// Parse a settings document. The base URL always ends with `/`.
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        let mut settings: AppSettings = toml::from_str(contents)?;
        if !settings.api.base_url.ends_with('/') {
            settings.api.base_url.push('/');
        }
        let min = settings.validation.complaint_number_min_len;
        let max = settings.validation.complaint_number_max_len;
        if min > max {
            return Err(SettingsError::ComplaintBounds { min, max });
        }
        Ok(settings)
    }

    /// Load a deployment document, naming its origin in the error.
    pub fn load(contents: &str, origin: &str) -> anyhow::Result<Self> {
        Self::from_toml(contents).with_context(|| format!("loading settings from {}", origin))
    }

    /// Embedded defaults.
    pub fn embedded() -> Self {
        Self::from_toml(DEFAULT_SETTINGS).unwrap_or_else(|_| Self::fallback())
    }

    fn fallback() -> Self {
        Self {
            api: ApiSettings {
                base_url: "http://localhost:8000/".to_string(),
            },
            validation: ValidationThresholds::default(),
            chart: ChartTiming::default(),
            ui: UiTiming::default(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            vendor_other_cost_ratio: 0.8,
            default_rewinding_base_cost: 0.0,
            complaint_number_min_len: 13,
            complaint_number_max_len: 15,
        }
    }
}

impl Default for ChartTiming {
    fn default() -> Self {
        Self {
            division_stagger_ms: 200,
            segment_delay_ms: 300,
        }
    }
}

impl Default for UiTiming {
    fn default() -> Self {
        Self {
            reload_delay_ms: 1500,
            complaint_reload_delay_ms: 800,
            toast_dismiss_ms: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = AppSettings::from_toml(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:8000/");
        assert_eq!(settings.validation, ValidationThresholds::default());
        assert_eq!(settings.chart, ChartTiming::default());
        assert_eq!(settings.ui, UiTiming::default());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let doc = DEFAULT_SETTINGS.replace(
            "base_url = \"http://localhost:8000/\"",
            "base_url = \"https://api.example.com\"",
        );
        let settings = AppSettings::from_toml(&doc).unwrap();
        assert_eq!(settings.api.base_url, "https://api.example.com/");
    }

    #[test]
    fn test_inverted_complaint_bounds_rejected() {
        let doc = DEFAULT_SETTINGS.replace(
            "complaint_number_min_len = 13",
            "complaint_number_min_len = 20",
        );
        let err = AppSettings::from_toml(&doc).unwrap_err();
        assert!(matches!(err, SettingsError::ComplaintBounds { min: 20, max: 15 }));
    }

    #[test]
    fn test_missing_section_rejected() {
        let err = AppSettings::from_toml("[api]\nbase_url = \"x\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_names_origin() {
        let err = AppSettings::load("[api]", "SMART_ENTERPRISE_SETTINGS").unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.starts_with("loading settings from SMART_ENTERPRISE_SETTINGS"));
        assert!(err.downcast_ref::<SettingsError>().is_some());
    }
}
