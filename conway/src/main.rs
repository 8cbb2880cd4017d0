// main.rs - Interactive Conway's Game of Life
// Paint cells with the left mouse button, SPACE starts/pauses the simulation.

use eframe::egui;
use life_grid::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};

mod ui;

use ui::LifeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!("opening {SCREEN_WIDTH}x{SCREEN_HEIGHT} window");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
    .inspect_err(|err| log::error!("window loop failed: {err}"))
}
