use crate::draw::model::Color;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "inkpad_settings.json";

const MAX_BRUSH_SIZE: u32 = 64;
const MAX_CANVAS_EDGE: u32 = 8192;

fn default_brush_size() -> u32 {
    2
}

fn default_pen_color() -> Color {
    Color::BLACK
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_brush_size")]
    pub brush_size: u32,
    #[serde(default = "default_pen_color")]
    pub pen_color: Color,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Export folder override. If `None`, exports land in a folder next to
    /// the executable.
    #[serde(default)]
    pub export_folder: Option<PathBuf>,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_size: default_brush_size(),
            pen_color: default_pen_color(),
            background: default_background(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            export_folder: None,
            debug_logging: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let loaded: Self = serde_json::from_str(&content)
            .with_context(|| format!("deserialize settings file {}", path.display()))?;
        Ok(loaded.sanitized())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, json)
            .with_context(|| format!("write settings file {}", path.display()))?;
        Ok(())
    }

    /// Clamps degenerate values from hand-edited files.
    pub fn sanitized(mut self) -> Self {
        self.brush_size = self.brush_size.clamp(1, MAX_BRUSH_SIZE);
        self.canvas_width = self.canvas_width.clamp(1, MAX_CANVAS_EDGE);
        self.canvas_height = self.canvas_height.clamp(1, MAX_CANVAS_EDGE);
        self
    }
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

#[cfg(test)]
mod tests {
    use super::{settings_path_from_exe_path, Settings, SETTINGS_FILE_NAME};
    use crate::draw::model::Color;
    use std::path::Path;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/inkpad_settings.json"))
            .expect("load defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.brush_size, 2);
        assert_eq!(settings.pen_color, Color::BLACK);
        assert_eq!(settings.background, Color::WHITE);
    }

    #[test]
    fn missing_fields_fall_back_per_field() {
        let settings: Settings =
            serde_json::from_str(r#"{"brush_size": 6}"#).expect("partial settings");
        assert_eq!(settings.brush_size, 6);
        assert_eq!(settings.canvas_width, 800);
        assert_eq!(settings.canvas_height, 600);
        assert!(!settings.debug_logging);
    }

    #[test]
    fn sanitize_clamps_degenerate_values() {
        let settings: Settings = serde_json::from_str(
            r#"{"brush_size": 0, "canvas_width": 0, "canvas_height": 100000}"#,
        )
        .expect("settings json");
        let settings = settings.sanitized();
        assert_eq!(settings.brush_size, 1);
        assert_eq!(settings.canvas_width, 1);
        assert_eq!(settings.canvas_height, 8192);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        let mut settings = Settings::default();
        settings.brush_size = 4;
        settings.pen_color = Color::rgba(1, 2, 3, 255);
        settings.save(&path).expect("save");

        let reloaded = Settings::load(&path).expect("reload");
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn settings_path_is_sibling_of_exe() {
        let exe = Path::new("/tmp/myapp/bin/inkpad");
        let path = settings_path_from_exe_path(exe).expect("settings path");
        assert_eq!(path, Path::new("/tmp/myapp/bin").join(SETTINGS_FILE_NAME));
    }
}
