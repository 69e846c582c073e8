//! tapcalc - a four-function calculator

use eframe::NativeOptions;
use tapcalc::app::TapCalcApp;
use tapcalc::Settings;
use tapcore::TapTheme;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = Settings::path();
    let settings = Settings::load_from(&settings_path);
    log::info!("starting tapcalc, settings at {}", settings_path.display());

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([160.0, 240.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "tapcalc",
        options,
        Box::new(move |cc| {
            TapTheme::default().apply(&cc.egui_ctx);
            Box::new(TapCalcApp::new(cc, settings))
        }),
    )
}
