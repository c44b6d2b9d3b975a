//! Game settings
//!
//! Loaded from an optional `settings.json` in the working directory;
//! defaults apply when the file is missing or malformed. The font is a
//! hard startup requirement, the background image is not.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background image drawn behind the play field (optional at runtime)
    pub background_path: String,
    /// TTF font used for the life counter and overlay text (required)
    pub font_path: String,
    /// Sync presentation to the display refresh
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_path: "assets/background.jpg".to_owned(),
            font_path: "assets/font.ttf".to_owned(),
            vsync: true,
        }
    }
}

impl Settings {
    /// Settings file looked up next to the working directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from `settings.json`, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::error!("Ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background_path, "assets/background.jpg");
        assert_eq!(settings.font_path, "assets/font.ttf");
        assert!(settings.vsync);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"vsync": false}"#).unwrap();
        assert!(!settings.vsync);
        assert_eq!(settings.font_path, Settings::default().font_path);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            background_path: "bg.png".into(),
            font_path: "mono.ttf".into(),
            vsync: false,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.background_path, settings.background_path);
        assert_eq!(back.font_path, settings.font_path);
        assert_eq!(back.vsync, settings.vsync);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.font_path, Settings::default().font_path);
    }
}
