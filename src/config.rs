//! Window and render settings.
//!
//! Every lesson runs with [`WindowConfig::default`] unless a `gl-triangles.json` file is found in
//! the working directory. Fields missing from the file keep their default values.

use std::path::Path;

use glam::Vec4;
use serde::Deserialize;

pub const SCR_WIDTH: u32 = 800;
pub const SCR_HEIGHT: u32 = 600;
pub const GL_VERSION: (u8, u8) = (3, 3);
pub const CLEAR_COLOR: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

/// Name of the optional override file looked up in the working directory.
pub const CONFIG_FILE: &str = "gl-triangles.json";

/// Settings for the window, the GL context and the frame clear.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title. `None` lets the lesson pick its own.
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub vsync: bool,
    /// RGBA clear color.
    pub clear_color: [f32; 4],
    /// Rasterize polygons as lines.
    pub wireframe: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: SCR_WIDTH,
            height: SCR_HEIGHT,
            gl_version: GL_VERSION,
            vsync: true,
            clear_color: CLEAR_COLOR.to_array(),
            wireframe: false,
        }
    }
}

impl WindowConfig {
    /// Parses a config from JSON. Unknown fields are ignored.
    pub fn from_json(s: &str) -> Result<Self, String> {
        serde_json::from_str(s).map_err(|e| e.to_string())
    }

    /// Loads the config at `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be read or parsed is
    /// logged and also yields the defaults, so a bad override never keeps a lesson from starting.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| Self::from_json(&s));

        match parsed {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Returns the configured title, or `fallback` if none was set.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }

    pub fn clear_color(&self) -> Vec4 {
        Vec4::from_array(self.clear_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lesson_constants() {
        let config = WindowConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, (3, 3));
        assert_eq!(config.clear_color(), Vec4::new(0.2, 0.3, 0.3, 1.0));
        assert!(!config.wireframe);
        assert_eq!(config.title_or("FirstWindow"), "FirstWindow");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = WindowConfig::from_json(r#"{ "width": 1024, "title": "Hi", "wireframe": true }"#)
            .unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, SCR_HEIGHT);
        assert_eq!(config.title_or("FirstWindow"), "Hi");
        assert!(config.wireframe);
        assert_eq!(config.gl_version, GL_VERSION);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(WindowConfig::from_json("{ width: ").is_err());
        assert!(WindowConfig::from_json(r#"{ "width": "wide" }"#).is_err());
    }

    #[test]
    fn test_missing_or_bad_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("gl-triangles-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(WindowConfig::load_or_default(&missing), WindowConfig::default());

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert_eq!(WindowConfig::load_or_default(&bad), WindowConfig::default());

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{ "vsync": false, "gl_version": [4, 1] }"#).unwrap();
        let config = WindowConfig::load_or_default(&good);
        assert!(!config.vsync);
        assert_eq!(config.gl_version, (4, 1));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
