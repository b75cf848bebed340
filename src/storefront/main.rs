//! Storefront Entry Point
//!
//! Boots the desktop storefront: environment, tracing, then the eframe
//! window. All state lives in [`StorefrontApp`].

use pizzetta::storefront::StorefrontApp;

fn main() -> Result<(), eframe::Error> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pizzetta",
        options,
        Box::new(|_cc| Ok(Box::new(StorefrontApp::new()))),
    )
}
