//! Session state and its typed transitions.
//!
//! All mutation of the session goes through the methods here; the controller
//! owns one instance behind a mutex and decides when to emit snapshots.

use serde::Serialize;

use crate::error::{SessionError, VALIDATION_MESSAGE};
use crate::models::{GeneratedIcon, IconConfig};
use crate::presets::LOADING_MESSAGES;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Idle,
    Submitting,
    Displaying,
    Error,
}

/// Everything the frontend needs to render, derived from the state on every
/// transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub config: IconConfig,
    pub current: Option<GeneratedIcon>,
    pub history: Vec<GeneratedIcon>,
    pub error: Option<String>,
    pub loading_message: Option<String>,
}

#[derive(Debug, Default)]
pub struct SessionState {
    config: IconConfig,
    submitting: bool,
    loading_index: usize,
    current: Option<GeneratedIcon>,
    history: Vec<GeneratedIcon>,
    error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Free-form edit of the configuration; nothing is validated until submit.
    pub fn update_config(&mut self, config: IconConfig) {
        self.config = config;
    }

    /// Starts one generation cycle and returns the frozen config snapshot to
    /// send. A second submit while one is outstanding is rejected without
    /// touching state. Blank required fields set the validation message and
    /// never reach the network.
    pub fn begin_submit(&mut self) -> Result<IconConfig, SessionError> {
        if self.submitting {
            return Err(SessionError::Busy);
        }

        if self.config.app_name.trim().is_empty() || self.config.description.trim().is_empty() {
            self.error = Some(VALIDATION_MESSAGE.to_string());
            return Err(SessionError::MissingFields);
        }

        self.error = None;
        self.loading_index = 0;
        self.submitting = true;
        Ok(self.config.clone())
    }

    /// Advances the rotating loading message, wrapping after the last one.
    /// Only meaningful while submitting; returns the index now displayed.
    pub fn advance_loading_message(&mut self) -> usize {
        if self.submitting {
            self.loading_index = (self.loading_index + 1) % LOADING_MESSAGES.len();
        }
        self.loading_index
    }

    /// Records a successful generation: the new icon becomes current and the
    /// head of history.
    pub fn settle_success(&mut self, icon: GeneratedIcon) {
        self.submitting = false;
        self.error = None;
        self.current = Some(icon.clone());
        self.history.insert(0, icon);
    }

    /// Records a failed generation; current result and history are untouched.
    pub fn settle_failure(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Makes a history item the current result. History itself is untouched.
    pub fn select(&mut self, id: &str) -> Result<(), SessionError> {
        let icon = self
            .history
            .iter()
            .find(|icon| icon.id == id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownIcon(id.to_string()))?;
        self.current = Some(icon);
        self.error = None;
        Ok(())
    }

    /// Removes an id from history; unknown ids are a no-op. Removing the
    /// current result's id reverts the display to the empty placeholder.
    pub fn remove(&mut self, id: &str) {
        self.history.retain(|icon| icon.id != id);
        if self.current.as_ref().is_some_and(|icon| icon.id == id) {
            self.current = None;
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.submitting {
            SessionPhase::Submitting
        } else if self.error.is_some() {
            SessionPhase::Error
        } else if self.current.is_some() {
            SessionPhase::Displaying
        } else {
            SessionPhase::Idle
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            config: self.config.clone(),
            current: self.current.clone(),
            history: self.history.clone(),
            error: self.error.clone(),
            loading_message: self
                .submitting
                .then(|| LOADING_MESSAGES[self.loading_index].to_string()),
        }
    }
}
