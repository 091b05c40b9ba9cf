use crate::draw::canvas::Canvas;
use anyhow::{anyhow, Context, Result};
use std::io::Cursor;
use std::path::Path;

/// Decodes an encoded image (any format the codec stack understands) into
/// an RGBA canvas.
pub fn decode_canvas(bytes: &[u8]) -> Result<Canvas> {
    let img = image::load_from_memory(bytes)
        .context("decode image bytes")?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(Canvas::from_pixels(width, height, img.into_raw()))
}

/// Encodes the canvas as PNG, the lossless interchange format used for
/// files, exports, and shares.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let img = canvas_image(canvas)?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .context("encode canvas as png")?;
    Ok(bytes)
}

pub fn load_canvas(path: &Path) -> Result<Canvas> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image file {}", path.display()))?;
    decode_canvas(&bytes).with_context(|| format!("decode image file {}", path.display()))
}

pub fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent folder {}", parent.display()))?;
    }
    let img = canvas_image(canvas)?;
    img.save(path)
        .with_context(|| format!("write png file {}", path.display()))?;
    Ok(())
}

fn canvas_image(canvas: &Canvas) -> Result<image::RgbaImage> {
    image::RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.pixels().to_vec())
        .ok_or_else(|| anyhow!("canvas buffer does not match its dimensions"))
}

#[cfg(test)]
mod tests {
    use super::{decode_canvas, encode_png};
    use crate::draw::canvas::Canvas;
    use crate::draw::model::{Color, Point};
    use crate::draw::stroke::BrushSurface;

    #[test]
    fn png_round_trip_preserves_every_pixel() {
        let mut canvas = Canvas::new(5, 4, Color::WHITE);
        canvas.paint_brush(Point::new(1, 1), Color::rgba(200, 10, 10, 255), 2);

        let bytes = encode_png(&canvas).expect("encode");
        let decoded = decode_canvas(&bytes).expect("decode");

        assert_eq!(decoded, canvas);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(decode_canvas(b"not an image").is_err());
    }
}
