use tauri::{AppHandle, Manager, State};

use crate::models::{GeneratedIcon, IconConfig};
use crate::AppState;

use super::export;
use super::{SessionController, SessionSnapshot};

fn controller_from_state(state: &State<'_, AppState>) -> SessionController {
    state.session.clone()
}

#[tauri::command]
pub async fn get_session_state(state: State<'_, AppState>) -> Result<SessionSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}

#[tauri::command]
pub async fn update_config(
    state: State<'_, AppState>,
    config: IconConfig,
) -> Result<SessionSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.update_config(config).await)
}

#[tauri::command]
pub async fn generate_icon(state: State<'_, AppState>) -> Result<GeneratedIcon, String> {
    let controller = controller_from_state(&state);
    controller.generate().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn select_icon(
    state: State<'_, AppState>,
    id: String,
) -> Result<SessionSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.select(&id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_icon(
    state: State<'_, AppState>,
    id: String,
) -> Result<SessionSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.remove(&id).await)
}

#[tauri::command]
pub async fn export_icon(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    url: String,
    name: String,
) -> Result<String, String> {
    let downloads = app_handle.path().download_dir().map_err(|e| e.to_string())?;

    let controller = controller_from_state(&state);
    let path = export::save_icon(controller.client().http(), &url, &name, &downloads)
        .await
        .map_err(|e| e.to_string())?;

    // Best effort; the file is already on disk if this fails.
    let _ = tauri_plugin_opener::reveal_item_in_dir(&path);

    Ok(path.display().to_string())
}
