mod error;
mod generation;
mod models;
mod presets;
mod settings;

use std::sync::Arc;

use generation::{
    commands::{
        export_icon, generate_icon, get_session_state, remove_icon, select_icon, update_config,
    },
    events::TauriSessionEvents,
    GenerationClient, SessionController,
};
use presets::{ColorPreset, IconStylePreset, COLOR_PRESETS, ICON_STYLES};
use settings::{GeneratorSettings, SettingsStore};
use tauri::{Emitter, Manager, State};

pub(crate) struct AppState {
    pub(crate) session: SessionController,
    pub(crate) settings: Arc<SettingsStore>,
}

#[tauri::command]
fn get_icon_styles() -> Vec<IconStylePreset> {
    ICON_STYLES.to_vec()
}

#[tauri::command]
fn get_color_presets() -> Vec<ColorPreset> {
    COLOR_PRESETS.to_vec()
}

#[tauri::command]
fn get_generator_settings(state: State<AppState>) -> Result<GeneratorSettings, String> {
    Ok(state.settings.generator())
}

#[tauri::command]
fn set_generator_settings(
    settings: GeneratorSettings,
    state: State<AppState>,
    app_handle: tauri::AppHandle,
) -> Result<(), String> {
    state
        .settings
        .update_generator(settings.clone())
        .map_err(|e| e.to_string())?;

    app_handle
        .emit("generator-settings-updated", &settings)
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("IconForge starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = Arc::new(SettingsStore::new(settings_path)?);

                let client = GenerationClient::new()?;
                let events = Arc::new(TauriSessionEvents::new(app.handle().clone()));
                let session = SessionController::new(client, settings_store.clone(), events);

                app.manage(AppState {
                    session,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .on_window_event(|window, event| {
            if matches!(event, tauri::WindowEvent::Destroyed) && window.label() == "main" {
                // Any generation still in flight must settle as a no-op.
                let state: State<AppState> = window.state();
                state.session.shutdown();
            }
        })
        .invoke_handler(tauri::generate_handler![
            get_session_state,
            update_config,
            generate_icon,
            select_icon,
            remove_icon,
            export_icon,
            get_icon_styles,
            get_color_presets,
            get_generator_settings,
            set_generator_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
