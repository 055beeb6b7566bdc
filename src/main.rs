// TeamPulse Application
// Main entry point

use teampulse::ui_egui::TeamPulseApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting TeamPulse");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TeamPulse",
        options,
        Box::new(|cc| Ok(Box::new(TeamPulseApp::new(cc)))),
    )
}
