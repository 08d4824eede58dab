//! Settings loaded once at start-up.
//!
//! A deployment can bake its own TOML document into the bundle by setting
//! `SMART_ENTERPRISE_SETTINGS` when building; otherwise the defaults shipped
//! with `contracts` are used.

use contracts::shared::settings::{AppSettings, DEFAULT_SETTINGS};
use leptos::prelude::*;
use std::sync::OnceLock;

const BUILD_SETTINGS: Option<&str> = option_env!("SMART_ENTERPRISE_SETTINGS");

static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

fn parse_settings(source: &str) -> AppSettings {
    let origin = if BUILD_SETTINGS.is_some() {
        "SMART_ENTERPRISE_SETTINGS"
    } else {
        "embedded defaults"
    };
    match AppSettings::load(source, origin) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid settings, using defaults: {:#}", e);
            AppSettings::embedded()
        }
    }
}

/// Settings for this build. Parsed on first use.
///
/// Components read them through [`use_settings`]; this accessor is for `App`
/// and code running outside the component tree.
pub fn settings() -> &'static AppSettings {
    SETTINGS.get_or_init(|| parse_settings(BUILD_SETTINGS.unwrap_or(DEFAULT_SETTINGS)))
}

/// Settings provided by `App`.
pub fn use_settings() -> AppSettings {
    use_context::<AppSettings>().expect("AppSettings not found in context")
}

/// Base URL for API requests, with trailing slash.
pub fn api_base() -> &'static str {
    &settings().api.base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_settings_fall_back_to_defaults() {
        let settings = parse_settings("[api]\nbase_url = 42");
        assert_eq!(settings, AppSettings::embedded());
    }

    #[test]
    fn test_base_url_has_trailing_slash() {
        assert!(api_base().ends_with('/'));
    }
}
