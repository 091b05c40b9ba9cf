use crate::draw::canvas::Canvas;
use anyhow::{anyhow, Context, Result};
use std::borrow::Cow;

/// Puts the whole canvas on the system clipboard as an RGBA image.
pub fn copy_canvas(canvas: &Canvas) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("open clipboard")?;
    clipboard
        .set_image(arboard::ImageData {
            width: canvas.width() as usize,
            height: canvas.height() as usize,
            bytes: Cow::Owned(canvas.pixels().to_vec()),
        })
        .context("write image to clipboard")?;
    Ok(())
}

/// Reads an image off the system clipboard as a fresh canvas.
pub fn paste_canvas() -> Result<Canvas> {
    let mut clipboard = arboard::Clipboard::new().context("open clipboard")?;
    let img = clipboard
        .get_image()
        .context("read image from clipboard")?;
    let buf = image::RgbaImage::from_raw(
        img.width as u32,
        img.height as u32,
        img.bytes.into_owned(),
    )
    .ok_or_else(|| anyhow!("invalid clipboard image"))?;
    let (width, height) = buf.dimensions();
    Ok(Canvas::from_pixels(width, height, buf.into_raw()))
}
