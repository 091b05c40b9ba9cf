use crate::draw::canvas::Canvas;
use crate::draw::codec;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_SUBDIR: &str = "sketch_exports";

pub fn exe_relative_export_folder_from_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(EXPORT_SUBDIR))
}

/// Resolves the export folder (the settings override, or a folder next to
/// the executable) and makes sure it exists.
pub fn ensure_export_folder(override_dir: Option<&Path>) -> Result<PathBuf> {
    let output = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let exe_path = std::env::current_exe().context("resolve current executable")?;
            exe_relative_export_folder_from_path(&exe_path)?
        }
    };
    fs::create_dir_all(&output)
        .with_context(|| format!("create export folder {}", output.display()))?;
    Ok(output)
}

pub fn timestamped_stem(now: chrono::DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(stem: &str) -> String {
    format!("sketch_{}.png", stem)
}

/// Writes the canvas into `output_dir` under a timestamped name and returns
/// the path written.
pub fn export_canvas(
    canvas: &Canvas,
    output_dir: &Path,
    now: chrono::DateTime<Local>,
) -> Result<PathBuf> {
    let path = output_dir.join(build_filename(&timestamped_stem(now)));
    codec::save_png(canvas, &path)?;
    Ok(path)
}

/// Exports the canvas and hands the file to the platform's default handler,
/// the desktop rendition of a share surface.
pub fn share_canvas(
    canvas: &Canvas,
    output_dir: &Path,
    now: chrono::DateTime<Local>,
) -> Result<PathBuf> {
    let path = export_canvas(canvas, output_dir, now)?;
    open::that(&path).with_context(|| format!("hand {} to the system opener", path.display()))?;
    Ok(path)
}
