use eframe::egui;

use portfolio_shell::config::ShellConfig;

mod app;

use app::PortfolioApp;

fn main() {
    env_logger::init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Zian | Portfolio",
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(&cc.egui_ctx, config)))),
    )
    .expect("Failed to start portfolio shell");
}

/// Defaults, with the layout breakpoint optionally taken from
/// `PORTFOLIO_BREAKPOINT` (px).
fn load_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    if let Ok(raw) = std::env::var("PORTFOLIO_BREAKPOINT") {
        match raw.trim().parse::<f32>() {
            Ok(px) => config = config.with_breakpoint(px),
            Err(e) => log::warn!("PORTFOLIO_BREAKPOINT={:?} ignored: {}", raw, e),
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("{}; using built-in defaults", e);
            ShellConfig::default()
        }
    }
}
