use eframe::egui;

use iris_pairgrid::app::PairGridApp;
use iris_pairgrid::config::PageConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = PageConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(PairGridApp::new(config)?))),
    )
}
