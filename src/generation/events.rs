//! Outbound event seam between the session controller and the webview.
//!
//! The controller only talks to `SessionEvents`; the Tauri implementation
//! forwards to `app_handle.emit`, and tests substitute a recording one.

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::models::GeneratedIcon;

use super::state::SessionSnapshot;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingMessageEvent {
    pub index: usize,
    pub message: String,
}

pub trait SessionEvents: Send + Sync {
    fn state_changed(&self, snapshot: &SessionSnapshot);
    fn loading_message(&self, payload: &LoadingMessageEvent);
    /// Emitted on success only; the frontend scrolls to the top on this.
    fn icon_generated(&self, icon: &GeneratedIcon);
}

pub struct TauriSessionEvents {
    app_handle: AppHandle,
}

impl TauriSessionEvents {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl SessionEvents for TauriSessionEvents {
    fn state_changed(&self, snapshot: &SessionSnapshot) {
        let _ = self.app_handle.emit("session-state-changed", snapshot);
    }

    fn loading_message(&self, payload: &LoadingMessageEvent) {
        let _ = self.app_handle.emit("loading-message", payload);
    }

    fn icon_generated(&self, icon: &GeneratedIcon) {
        let _ = self.app_handle.emit("icon-generated", icon);
    }
}
