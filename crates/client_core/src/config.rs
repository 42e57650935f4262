use std::{collections::HashMap, fs, path::Path};

use tracing::warn;
use url::Url;

use crate::error::ConfigError;

pub const SETTINGS_FILE: &str = "order_form.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBackendSettings {
    pub endpoint: String,
    pub form_id: String,
}

impl Default for FormBackendSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://formspree.io/f".into(),
            form_id: "xykgnvyr".into(),
        }
    }
}

impl FormBackendSettings {
    pub fn submission_url(&self) -> Result<Url, ConfigError> {
        let form_id = self.form_id.trim();
        if form_id.is_empty() {
            return Err(ConfigError::MissingFormId);
        }
        let endpoint = self.endpoint.trim().trim_end_matches('/');
        let raw = format!("{endpoint}/{form_id}");
        Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

/// Defaults, then `order_form.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> FormBackendSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> FormBackendSettings {
    let mut settings = FormBackendSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, env);

    settings
}

fn apply_file_overrides(settings: &mut FormBackendSettings, raw: &str) {
    match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.get("endpoint") {
                settings.endpoint = v.clone();
            }
            if let Some(v) = file_cfg.get("form_id") {
                settings.form_id = v.clone();
            }
        }
        Err(err) => warn!("ignoring malformed {SETTINGS_FILE}: {err}"),
    }
}

fn apply_env_overrides(settings: &mut FormBackendSettings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("ORDER_FORM_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__FORM_ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = env("ORDER_FORM_ID") {
        settings.form_id = v;
    }
    if let Some(v) = env("APP__FORM_ID") {
        settings.form_id = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
