use eframe::egui;

mod app;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([750.0, 500.0])
            .with_min_inner_size([560.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Banking Management System",
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
