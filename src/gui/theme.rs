use eframe::egui;

use crate::whiteboard::model::Color;

/// Title-bar fill, the classic XP blue.
pub const TITLE_BAR_FILL: egui::Color32 = egui::Color32::from_rgb(0, 84, 227);
pub const TITLE_BAR_TEXT: egui::Color32 = egui::Color32::WHITE;

/// Control-surface gray used by the toolbar, palette and tab strip.
const CONTROL_FILL: egui::Color32 = egui::Color32::from_rgb(0xF0, 0xF0, 0xF0);
const CONTROL_BORDER: egui::Color32 = egui::Color32::from_rgb(0x99, 0x99, 0x99);
const WINDOW_BODY: egui::Color32 = egui::Color32::from_rgb(0xEC, 0xE9, 0xD8);

pub fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Light, flat, square-cornered visuals approximating the retro window
/// chrome the shell is skinned as.
pub fn retro_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = WINDOW_BODY;
    visuals.window_fill = WINDOW_BODY;
    visuals.faint_bg_color = CONTROL_FILL;
    visuals.extreme_bg_color = egui::Color32::WHITE;
    visuals.override_text_color = Some(egui::Color32::BLACK);

    visuals.widgets.noninteractive.bg_fill = CONTROL_FILL;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, CONTROL_BORDER);
    visuals.widgets.inactive.bg_fill = CONTROL_FILL;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, CONTROL_BORDER);
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(0xE3, 0xEE, 0xFF);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TITLE_BAR_FILL);
    visuals.widgets.active.bg_fill = egui::Color32::from_rgb(0xC1, 0xD2, 0xEE);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, TITLE_BAR_FILL);

    visuals.selection.bg_fill = TITLE_BAR_FILL;
    visuals.selection.stroke = egui::Stroke::new(1.0, TITLE_BAR_TEXT);

    // square corners everywhere; rounded widgets break the retro look
    visuals.widgets.noninteractive.rounding = egui::Rounding::ZERO;
    visuals.widgets.inactive.rounding = egui::Rounding::ZERO;
    visuals.widgets.hovered.rounding = egui::Rounding::ZERO;
    visuals.widgets.active.rounding = egui::Rounding::ZERO;
    visuals.widgets.open.rounding = egui::Rounding::ZERO;
    visuals.window_rounding = egui::Rounding::ZERO;
    visuals.menu_rounding = egui::Rounding::ZERO;

    visuals
}
