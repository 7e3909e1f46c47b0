mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Result;
use app::ExplorerApp;
use data::cache;
use data::source::DatasetSource;
use eframe::egui;

/// Usage: `immigration-explorer [DATASET | LAYOUT.json]`
fn main() -> Result<()> {
    env_logger::init();

    let loaded = match std::env::args().nth(1) {
        Some(arg) => {
            let source = DatasetSource::from_arg(&arg)?;
            log::info!("Reading {} (sheet {})", source.path.display(), source.sheet);
            cache::load_with(&source)
        }
        None => cache::load(),
    };
    let table = match loaded {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            return Err(anyhow::Error::new(e).context("the dashboard cannot start without its dataset"));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Immigration Data Analysis",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
