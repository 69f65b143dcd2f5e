//! egui host for the drawing core: uploads the surface layers as textures,
//! maps pointer traffic into surface space and renders the tool strip,
//! palette grid and width slider. No drawing logic lives here.

use crate::gui::theme;
use crate::whiteboard::mapper::{self, DisplayRect};
use crate::whiteboard::model::{StrokeStyle, Tool, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::whiteboard::palette::{PALETTE, PALETTE_COLUMNS};
use crate::whiteboard::{Whiteboard, SURFACE_BACKGROUND, SURFACE_HEIGHT, SURFACE_WIDTH};
use eframe::egui::{
    self, Color32, PointerButton, Pos2, Rect, Sense, Stroke, TextureHandle, TextureOptions,
};

const TOOLS: [(Tool, &str); 7] = [
    (Tool::Pencil, "Pencil"),
    (Tool::Brush, "Brush"),
    (Tool::Eraser, "Eraser"),
    (Tool::Line, "Line"),
    (Tool::Rect, "Rect"),
    (Tool::Ellipse, "Circle"),
    (Tool::Text, "Text"),
];

pub struct WhiteboardPanel {
    board: Whiteboard,
    committed_tex: Option<TextureHandle>,
    preview_tex: Option<TextureHandle>,
    layers_dirty: bool,
}

impl WhiteboardPanel {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            board: Whiteboard::new(SURFACE_WIDTH, SURFACE_HEIGHT, SURFACE_BACKGROUND, style),
            committed_tex: None,
            preview_tex: None,
            layers_dirty: true,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            let canvas_height = ui.available_height() - 92.0;
            ui.horizontal(|ui| {
                ui.set_height(canvas_height.max(120.0));
                self.tool_strip(ui);
                self.canvas(ui);
            });
            ui.add_space(4.0);
            self.palette_grid(ui);
            self.width_slider(ui);
        });
    }

    fn tool_strip(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.set_width(64.0);
            let mut tool = self.board.tool();
            for (candidate, label) in TOOLS {
                ui.selectable_value(&mut tool, candidate, label);
            }
            if tool != self.board.tool() {
                self.board.select_tool(tool);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;

        self.handle_pointer(&response, rect);
        self.sync_textures(ui.ctx());

        let uv = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
        if let Some(tex) = &self.committed_tex {
            painter.image(tex.id(), rect, uv, Color32::WHITE);
        }
        if let Some(tex) = &self.preview_tex {
            painter.image(tex.id(), rect, uv, Color32::WHITE);
        }
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(0x99)));
    }

    /// Forward the frame's pointer traffic into surface space. A drag
    /// position escaping the canvas rectangle finalizes the gesture the
    /// way the original's mouse-leave did.
    fn handle_pointer(&mut self, response: &egui::Response, rect: Rect) {
        let display = DisplayRect {
            left: rect.min.x,
            top: rect.min.y,
            width: rect.width(),
            height: rect.height(),
        };
        let intrinsic = self.board.surface().size();
        let map = |pos: Pos2| mapper::map_pointer(pos.x, pos.y, display, intrinsic);

        if response.drag_started_by(PointerButton::Primary) {
            if let Some(point) = response.interact_pointer_pos().and_then(map) {
                self.board.pointer_down(point);
                self.layers_dirty = true;
            }
        } else if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(point) = map(pos) {
                    if self.board.gesture_active() && !rect.contains(pos) {
                        self.board.pointer_leave(point);
                    } else {
                        self.board.pointer_move(point);
                    }
                    self.layers_dirty = true;
                }
            }
        } else if response.drag_stopped_by(PointerButton::Primary) {
            if let Some(point) = response.interact_pointer_pos().and_then(map) {
                self.board.pointer_up(point);
                self.layers_dirty = true;
            }
        }
    }

    fn sync_textures(&mut self, ctx: &egui::Context) {
        if !self.layers_dirty && self.committed_tex.is_some() {
            return;
        }
        let (width, height) = self.board.surface().size();
        let size = [width as usize, height as usize];
        let committed =
            egui::ColorImage::from_rgba_unmultiplied(size, self.board.surface().committed_rgba());
        let preview =
            egui::ColorImage::from_rgba_unmultiplied(size, self.board.surface().preview_rgba());

        match &mut self.committed_tex {
            Some(tex) => tex.set(committed, TextureOptions::NEAREST),
            None => {
                self.committed_tex =
                    Some(ctx.load_texture("whiteboard_committed", committed, TextureOptions::NEAREST));
            }
        }
        match &mut self.preview_tex {
            Some(tex) => tex.set(preview, TextureOptions::NEAREST),
            None => {
                self.preview_tex =
                    Some(ctx.load_texture("whiteboard_preview", preview, TextureOptions::NEAREST));
            }
        }
        self.layers_dirty = false;
    }

    fn palette_grid(&mut self, ui: &mut egui::Ui) {
        let current = self.board.style().color;
        for row in PALETTE.chunks(PALETTE_COLUMNS) {
            ui.horizontal(|ui| {
                for &color in row {
                    let stroke = if color == current {
                        Stroke::new(2.0, Color32::BLACK)
                    } else {
                        Stroke::new(1.0, Color32::from_gray(0x66))
                    };
                    let swatch = egui::Button::new("")
                        .fill(theme::color32(color))
                        .stroke(stroke)
                        .min_size(egui::vec2(20.0, 20.0));
                    if ui.add(swatch).clicked() {
                        self.board.set_color(color);
                    }
                }
            });
        }
    }

    fn width_slider(&mut self, ui: &mut egui::Ui) {
        let mut width = self.board.style().width;
        let slider = egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH)
            .integer()
            .text("Width");
        if ui.add(slider).changed() {
            self.board.set_width(width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH));
        }
    }
}
