mod audio;
mod config;
mod error;
mod ops;
mod soundboard;
mod types;
mod ui;

use eframe::egui;

use crate::audio::{AudioEngine, RodioEngine, SilentEngine};
use crate::config::AppConfig;
use crate::soundboard::{Action, Soundboard};
use crate::types::notice::Notice;
use crate::types::volume::Volume;
use crate::ui::app::SoundboardApp;

fn init_tracing() {
    if let Ok(env_filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("info")
            .compact()
            .init();
    }
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = AppConfig::resolve();
    let mut notices = Vec::new();

    let engine: Box<dyn AudioEngine> = match RodioEngine::new() {
        Ok(engine) => Box::new(engine),
        Err(err) => {
            tracing::error!("{err}; continuing without sound");
            notices.push(Notice::from(&err));
            Box::new(SilentEngine)
        }
    };

    let volume = Volume::new(config.default_volume).unwrap_or_default();
    let mut soundboard = Soundboard::new(engine, config.sound_dir.clone(), volume);
    if let Some(notice) = soundboard.dispatch(Action::Refresh) {
        notices.push(notice);
    }

    let app = SoundboardApp::new(config.app_name.clone(), soundboard, notices);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.app_name)
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    eframe::run_native(
        &config.app_name,
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
