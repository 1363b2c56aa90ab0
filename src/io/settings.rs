//! Persisted user settings (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_PATH: &str = "logo.png";
pub const DEFAULT_DIAGRAM_PATH: &str = "flowchart.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Pre-filled project name in the export form.
    pub project_name: String,
    /// Sidebar logo, relative to the working directory unless absolute.
    pub logo_path: PathBuf,
    /// Process diagram shown above the stage form.
    pub diagram_path: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            diagram_path: PathBuf::from(DEFAULT_DIAGRAM_PATH),
        }
    }
}

impl AppSettings {
    /// Location of `settings.json`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "StageDashboard") {
            proj_dirs.config_dir().join("settings.json")
        } else {
            PathBuf::from(".").join("settings.json")
        }
    }

    /// Load settings; a missing or malformed file yields the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => {
                log::debug!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = AppSettings::load(&dir.path().join("nope.json"));
        assert_eq!(s, AppSettings::default());
        assert_eq!(s.logo_path, PathBuf::from("logo.png"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "project_name": "Alpha" }"#).unwrap();
        let s = AppSettings::load(&path);
        assert_eq!(s.project_name, "Alpha");
        assert_eq!(s.diagram_path, PathBuf::from(DEFAULT_DIAGRAM_PATH));
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(AppSettings::load(&path), AppSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            project_name: "Beta".into(),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(AppSettings::load(&path), settings);
    }
}
