// Rust Calendar drag overlay demo
// Main entry point

use anyhow::Result;
use rust_calendar_drag::models::settings::OverlaySettings;
use rust_calendar_drag::services::settings::SettingsService;
use rust_calendar_drag::ui_egui::theme::OverlayTheme;
use rust_calendar_drag::ui_egui::DragOverlayApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Calendar drag overlay demo");

    let settings = match SettingsService::for_user() {
        Some(service) => {
            log::info!("Loading overlay settings from {}", service.path().display());
            service.load_or_default()
        }
        None => OverlaySettings::default(),
    };
    let system_dark = matches!(dark_light::detect(), dark_light::Mode::Dark);
    let theme = OverlayTheme::from_name(&settings.theme, system_dark);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Calendar - Drag Overlay",
        options,
        Box::new(move |cc| Ok(Box::new(DragOverlayApp::new(cc, settings, theme)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to run application: {}", err))
}
