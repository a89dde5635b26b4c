// Bookmark list settings engine
// Loads, saves, updates and resets `ListSettings`.
// Settings are stored as a JSON file; the path comes from the caller, the
// BOOKMARK_LIST_CONFIG environment variable, or `bookmark_list.json`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::types::errors::SettingsError;
use crate::types::settings::{ListSettings, MAX_NOTIFICATION_CAPACITY};

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "BOOKMARK_LIST_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "bookmark_list.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ListSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ListSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine that persists `ListSettings` as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ListSettings,
}

impl SettingsEngine {
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        Self {
            config_path,
            settings: ListSettings::default(),
        }
    }

    fn to_value(&self) -> Result<Value, SettingsError> {
        serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })
    }
}

/// Rejects values that deserialize but cannot be used.
fn validate(settings: &ListSettings) -> Result<(), SettingsError> {
    let capacity = settings.notification_capacity;
    if capacity == 0 || capacity > MAX_NOTIFICATION_CAPACITY {
        return Err(SettingsError::InvalidValue(format!(
            "notification_capacity must be between 1 and {}, got {}",
            MAX_NOTIFICATION_CAPACITY, capacity
        )));
    }
    Ok(())
}

/// Replaces the leaf named by a dot-separated path; the leaf must already exist.
fn replace_at_path(root: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
    let mut current = root;
    let mut parts = key.split('.').peekable();
    while let Some(part) = parts.next() {
        let map = current.as_object_mut().ok_or_else(|| {
            SettingsError::InvalidKey(format!("'{}' does not name a settings field", key))
        })?;
        let slot = map
            .get_mut(part)
            .ok_or_else(|| SettingsError::InvalidKey(format!("Key '{}' not found in settings", key)))?;
        if parts.peek().is_none() {
            *slot = value;
            return Ok(());
        }
        current = slot;
    }
    Err(SettingsError::InvalidKey("Key cannot be empty".to_string()))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from disk. A missing file yields defaults.
    fn load(&mut self) -> Result<ListSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            log::debug!("no settings at {}, using defaults", self.config_path);
            self.settings = ListSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: ListSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse config file: {}", e))
        })?;
        validate(&settings)?;
        self.settings = settings;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::Io(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::Serialization(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SettingsError::Io(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &ListSettings {
        &self.settings
    }

    /// Updates one setting by dot path, e.g. `"capabilities.can_manage_list"`,
    /// and saves. The new value must deserialize into `ListSettings`.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.trim().is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json = self.to_value()?;
        replace_at_path(&mut json, key, value)?;

        let settings: ListSettings = serde_json::from_value(json).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for '{}': {}", key, e))
        })?;
        validate(&settings)?;
        self.settings = settings;
        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ListSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
