//! Desktop entry point for the people registry.
//! Resolves configuration, starts logging and opens the form window.

mod app;
mod config;
mod form;
mod prompt;

use app::CadastroApp;
use cadastro_core::{init_logging, PersonStore};
use config::AppConfig;
use eframe::egui;
use form::PersonForm;
use log::info;
use prompt::NativePrompt;

const WINDOW_TITLE: &str = "Cadastro de Pessoas";

fn main() -> eframe::Result<()> {
    let config = AppConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=app_config module=app status=ok db_path={} log_dir={}",
        config.db_path.display(),
        config.log_dir.display()
    );

    let store = PersonStore::new(config.db_path);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 400.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            Ok(Box::new(CadastroApp::new(
                PersonForm::new(store),
                NativePrompt,
            )))
        }),
    )
}
