//! The retro window shell: custom title bar, tab strip, and the panels
//! hosted behind the tabs. Pure UI wiring; the drawing core neither knows
//! nor cares what hosts it.

pub mod theme;
pub mod whiteboard_panel;

use crate::settings::Settings;
use eframe::egui::{self, RichText, Sense, ViewportCommand};
use self::whiteboard_panel::WhiteboardPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Paint,
    Notes,
    About,
}

pub struct ShellApp {
    active_tab: Tab,
    whiteboard: WhiteboardPanel,
}

impl ShellApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        cc.egui_ctx.set_visuals(theme::retro_visuals());
        Self {
            active_tab: Tab::Paint,
            whiteboard: WhiteboardPanel::new(settings.initial_style()),
        }
    }

    fn title_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("title_bar")
            .frame(egui::Frame::none().fill(theme::TITLE_BAR_FILL))
            .exact_height(30.0)
            .show(ctx, |ui| {
                let bar_rect = ui.max_rect();
                let drag = ui.interact(
                    bar_rect,
                    egui::Id::new("title_bar_drag"),
                    Sense::click_and_drag(),
                );
                if drag.drag_started() {
                    ctx.send_viewport_cmd(ViewportCommand::StartDrag);
                }
                if drag.double_clicked() {
                    let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                    ctx.send_viewport_cmd(ViewportCommand::Maximized(!maximized));
                }

                ui.horizontal_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("MacXP")
                            .color(theme::TITLE_BAR_TEXT)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(4.0);
                        if ui.button("🗙").clicked() {
                            ctx.send_viewport_cmd(ViewportCommand::Close);
                        }
                        if ui.button("🗖").clicked() {
                            let maximized =
                                ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                            ctx.send_viewport_cmd(ViewportCommand::Maximized(!maximized));
                        }
                        if ui.button("🗕").clicked() {
                            ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
                        }
                    });
                });
            });
    }

    fn tab_strip(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_tab, Tab::Paint, "Paint");
            ui.selectable_value(&mut self.active_tab, Tab::Notes, "Notes");
            ui.selectable_value(&mut self.active_tab, Tab::About, "About");
        });
        ui.separator();
    }

    fn tab_body(&mut self, ui: &mut egui::Ui) {
        match self.active_tab {
            Tab::Paint => self.whiteboard.ui(ui),
            Tab::Notes => {
                ui.heading("Notes");
                ui.label("Nothing here yet.");
            }
            Tab::About => {
                ui.heading("MacXP");
                ui.label("A retro desktop shell with a built-in whiteboard.");
                ui.label(concat!("Version ", env!("CARGO_PKG_VERSION")));
            }
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.title_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.tab_strip(ui);
            self.tab_body(ui);
        });

        // Keep repainting while a stroke is in flight so freehand ink
        // appears under the pointer, not a frame late.
        if self.active_tab == Tab::Paint && ctx.input(|i| i.pointer.primary_down()) {
            ctx.request_repaint();
        }
    }
}
