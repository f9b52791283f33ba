//! QuadMarket Desktop App - Main Entry Point
//!
//! Sets up logging, builds the app state against the configured service
//! URL, and runs the eframe event loop.

use eframe::egui;
use quadmarket::egui_app::{views, AppState, Config};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::new();
    tracing::info!("using service at {}", config.api_url());

    let state = match AppState::try_new(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "QuadMarket",
        options,
        Box::new(|_cc| Ok(Box::new(MarketApp { state }))),
    )
}

/// Main application shell
struct MarketApp {
    state: AppState,
}

impl eframe::App for MarketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Worker results and feed messages arrive between frames
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
