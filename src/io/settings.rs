use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted user settings (lives in the OS config directory). Only ambient
/// preferences are stored; navigation state never survives a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub epoch: NaiveDate,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            epoch: crate::model::ScrubConfig::default().epoch,
        }
    }
}

/// Path to the settings file inside the OS config directory, if resolvable.
pub fn settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "day-scrubber")
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Load settings, falling back to defaults on any problem. A malformed file
/// gets a warning on stderr rather than blocking startup.
pub fn load_settings(path: &PathBuf) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Warning: failed to parse settings {:?}: {}", path, e);
                AppSettings::default()
            }
        },
        Err(_) => AppSettings::default(),
    }
}

/// Save settings as pretty JSON, creating the config directory if needed.
pub fn save_settings(settings: &AppSettings, path: &PathBuf) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings {
            epoch: "2021-06-15".parse().unwrap(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.epoch, settings.epoch);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(back.epoch, AppSettings::default().epoch);
    }
}
