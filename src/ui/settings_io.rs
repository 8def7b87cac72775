use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("adforge");
    if let Err(e) = fs::create_dir_all(&path) {
        warn!("could not create config directory {}: {e}", path.display());
    }
    path.push("ui_settings.json");
    path
}

pub fn load_settings() -> UiSettings {
    load_from(&settings_path())
}

pub fn save_settings(settings: &UiSettings) {
    save_to(&settings_path(), settings);
}

fn load_from(path: &Path) -> UiSettings {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn save_to(path: &Path, settings: &UiSettings) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                warn!("could not save UI settings to {}: {e}", path.display());
            }
        }
        Err(e) => warn!("could not serialize UI settings: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui_settings.json");

        let settings = UiSettings { ui_scale: 1.5 };
        save_to(&path, &settings);

        assert_eq!(load_from(&path), settings);
    }

    #[test]
    fn missing_or_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.json");
        assert_eq!(load_from(&missing), UiSettings::default());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(load_from(&corrupt), UiSettings::default());
    }
}
