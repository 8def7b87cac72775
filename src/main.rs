mod config;
mod engine;
mod export;
mod model;
mod ui;

fn main() -> eframe::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::AppConfig::from_env();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "AI Advertising Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::AdApp::new(config)?))),
    )
}
