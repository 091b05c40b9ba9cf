mod canvas_view;

use crate::draw::canvas::Canvas;
use crate::draw::clipboard;
use crate::draw::codec;
use crate::draw::export;
use crate::draw::model::{Brush, Color};
use crate::draw::stroke::StrokePen;
use crate::settings::Settings;
use canvas_view::CanvasView;
use chrono::Local;
use eframe::egui::{self, Color32};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;

pub struct SketchApp {
    canvas: Canvas,
    pen: StrokePen,
    view: CanvasView,
    settings: Settings,
    settings_path: Option<PathBuf>,
    toasts: Toasts,
}

impl SketchApp {
    pub fn new(canvas: Canvas, settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let brush = Brush {
            color: settings.pen_color,
            size: settings.brush_size,
        };
        Self {
            canvas,
            pen: StrokePen::new(brush),
            view: CanvasView::new(),
            settings,
            settings_path,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
        }
    }

    fn notify(&mut self, text: String) {
        self.toasts.add(Toast {
            text: text.into(),
            kind: ToastKind::Success,
            options: ToastOptions::default().duration_in_seconds(3.0),
        });
    }

    fn report_error(&mut self, text: String) {
        tracing::warn!("{}", text);
        self.toasts.add(Toast {
            text: text.into(),
            kind: ToastKind::Error,
            options: ToastOptions::default().duration_in_seconds(5.0),
        });
    }

    fn replace_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        self.view.mark_dirty();
    }

    fn clear_canvas(&mut self) {
        self.canvas.fill(self.settings.background);
        self.view.mark_dirty();
    }

    fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .pick_file()
        else {
            return;
        };
        match codec::load_canvas(&path) {
            Ok(canvas) => {
                self.replace_canvas(canvas);
                self.notify(format!("Opened {}", path.display()));
            }
            Err(err) => self.report_error(format!("Failed to open image: {err:#}")),
        }
    }

    fn save_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(export::build_filename(&export::timestamped_stem(
                Local::now(),
            )))
            .save_file()
        else {
            return;
        };
        match codec::save_png(&self.canvas, &path) {
            Ok(()) => self.notify(format!("Saved {}", path.display())),
            Err(err) => self.report_error(format!("Failed to save sketch: {err:#}")),
        }
    }

    fn copy_image(&mut self) {
        match clipboard::copy_canvas(&self.canvas) {
            Ok(()) => self.notify("Copied sketch to clipboard".to_string()),
            Err(err) => self.report_error(format!("Failed to copy sketch: {err:#}")),
        }
    }

    fn paste_image(&mut self) {
        match clipboard::paste_canvas() {
            Ok(canvas) => {
                self.replace_canvas(canvas);
                self.notify("Pasted image from clipboard".to_string());
            }
            Err(err) => self.report_error(format!("Failed to paste image: {err:#}")),
        }
    }

    fn share_image(&mut self) {
        let result = export::ensure_export_folder(self.settings.export_folder.as_deref())
            .and_then(|dir| export::share_canvas(&self.canvas, &dir, Local::now()));
        match result {
            Ok(path) => self.notify(format!("Shared {}", path.display())),
            Err(err) => self.report_error(format!("Failed to share sketch: {err:#}")),
        }
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.clone() else {
            return;
        };
        if let Err(err) = self.settings.save(&path) {
            tracing::warn!("could not persist settings: {:#}", err);
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let brush = self.pen.brush();
            let mut color = Color32::from_rgba_unmultiplied(
                brush.color.r,
                brush.color.g,
                brush.color.b,
                brush.color.a,
            );
            if ui.color_edit_button_srgba(&mut color).changed() {
                let [r, g, b, a] = color.to_array();
                self.pen.set_color(Color::rgba(r, g, b, a));
                self.settings.pen_color = self.pen.brush().color;
                self.persist_settings();
            }

            let mut size = brush.size;
            if ui
                .add(egui::Slider::new(&mut size, 1..=16).text("Brush"))
                .changed()
            {
                self.pen.set_size(size);
                self.settings.brush_size = self.pen.brush().size;
                self.persist_settings();
            }

            ui.separator();
            if ui.button("Clear").clicked() {
                self.clear_canvas();
            }
            if ui.button("Open…").clicked() {
                self.open_image();
            }
            if ui.button("Save…").clicked() {
                self.save_image();
            }
            if ui.button("Copy").clicked() {
                self.copy_image();
            }
            if ui.button("Paste").clicked() {
                self.paste_image();
            }
            if ui.button("Share").clicked() {
                self.share_image();
            }
        });
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.view.show(ui, &mut self.canvas, &mut self.pen);
            });
        });
        self.toasts.show(ctx);
    }
}
