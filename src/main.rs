use eframe::egui;
use macxp::gui::ShellApp;
use macxp::logging;
use macxp::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging);
    tracing::info!("starting MacXP shell");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MacXP")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0])
            // the shell draws its own retro title bar
            .with_decorations(false),
        ..Default::default()
    };

    eframe::run_native(
        "MacXP",
        native_options,
        Box::new(move |cc| Box::new(ShellApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("shell exited with an error: {e}"))?;

    Ok(())
}
