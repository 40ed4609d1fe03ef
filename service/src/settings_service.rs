use std::{collections::HashMap, path::PathBuf};

use core_types::SettingName;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

use crate::{error::Error, view_models::Settings};

/// Loads and saves application settings.
///
/// Settings come from an optional JSON file holding a flat object keyed by
/// setting name. Environment variables named `REALTY_<SETTING>` override the
/// file. Anything not set falls back to [`Settings::default`].
#[derive(Debug, Clone, Default)]
pub struct SettingsService {
    settings_file: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(settings_file: Option<PathBuf>) -> Self {
        Self { settings_file }
    }

    pub fn settings_file(&self) -> Option<&PathBuf> {
        self.settings_file.as_ref()
    }

    pub fn load_settings(&self) -> Result<Settings, Error> {
        self.load_settings_with_env(|key| std::env::var(key).ok())
    }

    /// Same as [`load_settings`](Self::load_settings) with a custom environment lookup.
    pub fn load_settings_with_env(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Settings, Error> {
        let mut settings_map = match &self.settings_file {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::IoError(format!(
                        "Failed to read settings file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                parse_settings_json(&content)?
            }
            Some(path) => {
                tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
                HashMap::new()
            }
            None => HashMap::new(),
        };

        for name in SettingName::iter() {
            if let Some(value) = env(&name.env_var()) {
                tracing::debug!(setting = %name, "Setting overridden from environment");
                settings_map.insert(name.as_str().to_string(), value);
            }
        }

        Settings::try_from(settings_map)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), Error> {
        let path = self.settings_file.as_ref().ok_or_else(|| {
            Error::SettingsError("No settings file configured".to_string())
        })?;

        let object: Map<String, Value> = settings
            .to_map()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        let content = serde_json::to_string_pretty(&Value::Object(object))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

fn parse_settings_json(content: &str) -> Result<HashMap<String, String>, Error> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(object) = value else {
        return Err(Error::SettingsError(
            "Settings file must contain a JSON object".to_string(),
        ));
    };

    let mut settings_map = HashMap::new();
    for (key, value) in object {
        if SettingName::try_from(key.as_str()).is_err() {
            tracing::warn!(key = %key, "Ignoring unknown setting");
            continue;
        }
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                return Err(Error::SettingsError(format!(
                    "Invalid value {} for {}",
                    other, key
                )));
            }
        };
        settings_map.insert(key, value);
    }
    Ok(settings_map)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let service = SettingsService::new(None);
        let settings = service.load_settings_with_env(no_env).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(Some(dir.path().join("missing.json")));
        let settings = service.load_settings_with_env(no_env).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"max_photo_count": 4, "simulated_upload_delay_ms": "20", "theme": "dark"}"#,
        )
        .unwrap();

        let service = SettingsService::new(Some(path));
        let settings = service.load_settings_with_env(no_env).unwrap();

        assert_eq!(settings.max_photo_count, 4);
        assert_eq!(settings.simulated_upload_delay, Duration::from_millis(20));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"max_photo_count": 4}"#).unwrap();

        let service = SettingsService::new(Some(path));
        let settings = service
            .load_settings_with_env(|key| {
                (key == "REALTY_MAX_PHOTO_COUNT").then(|| "7".to_string())
            })
            .unwrap();

        assert_eq!(settings.max_photo_count, 7);
    }

    #[test]
    fn test_invalid_file_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        std::fs::write(&path, "[1, 2]").unwrap();
        let service = SettingsService::new(Some(path.clone()));
        assert!(matches!(
            service.load_settings_with_env(no_env),
            Err(Error::SettingsError(_))
        ));

        std::fs::write(&path, r#"{"max_photo_count": true}"#).unwrap();
        assert!(matches!(
            service.load_settings_with_env(no_env),
            Err(Error::SettingsError(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(service.load_settings_with_env(no_env).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let service = SettingsService::new(Some(path.clone()));
        let settings = Settings {
            max_photo_count: 6,
            simulated_upload_delay: Duration::from_millis(0),
            listing_max_photo_count: 12,
        };

        service.save_settings(&settings).unwrap();

        assert!(path.exists());
        assert_eq!(
            service.load_settings_with_env(no_env).unwrap(),
            settings
        );
    }

    #[test]
    fn test_save_without_file() {
        let service = SettingsService::default();
        assert!(matches!(
            service.save_settings(&Settings::default()),
            Err(Error::SettingsError(_))
        ));
    }
}
