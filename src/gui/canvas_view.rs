use crate::draw::canvas::Canvas;
use crate::draw::model::Point;
use crate::draw::stroke::{PointerEvent, StrokePen};
use eframe::egui::{self, PointerButton, Sense, TextureHandle, TextureOptions};

/// Shows the canvas pixel-for-pixel and feeds pointer drags into the pen.
pub struct CanvasView {
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl CanvasView {
    pub fn new() -> Self {
        Self {
            texture: None,
            dirty: true,
        }
    }

    /// Forces a texture re-upload on the next frame. Called after the canvas
    /// is replaced wholesale (open, paste, clear).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, canvas: &mut Canvas, pen: &mut StrokePen) {
        let display = egui::vec2(canvas.width() as f32, canvas.height() as f32);
        let (response, painter) = ui.allocate_painter(display, Sense::drag());
        let origin = response.rect.min;
        // Sample the pixel under the cursor, truncating like the reference
        // surface does.
        let to_canvas = |pos: egui::Pos2| {
            Point::new(
                (pos.x - origin.x).floor() as i32,
                (pos.y - origin.y).floor() as i32,
            )
        };

        let mut painted = false;
        if response.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                pen.handle(PointerEvent::Press(to_canvas(pos)), canvas);
                painted = true;
            }
        } else if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                pen.handle(PointerEvent::Move(to_canvas(pos)), canvas);
                painted = true;
            }
        }
        if response.drag_stopped_by(PointerButton::Primary) {
            pen.handle(PointerEvent::Release, canvas);
        } else if pen.is_drawing() && !ui.input(|i| i.pointer.any_down()) {
            // The release never reached this widget (pointer left the
            // window mid-stroke); close the stroke instead of leaving it
            // open forever.
            pen.handle(PointerEvent::Cancel, canvas);
        }

        if painted {
            self.dirty = true;
        }

        if self.dirty || self.texture.is_none() {
            let size = [canvas.width() as usize, canvas.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, canvas.pixels());
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "sketch_canvas",
                        image,
                        TextureOptions::NEAREST,
                    ));
                }
            }
            self.dirty = false;
        }

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                response.rect,
                egui::Rect::from_min_max(egui::Pos2::new(0.0, 0.0), egui::Pos2::new(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
    }
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new()
    }
}
