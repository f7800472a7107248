//! Session controller: owns the state machine, runs the generation flow and
//! the loading-message ticker, and guards against completions that land after
//! shutdown.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use tokio::{sync::Mutex, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::error::SessionError;
use crate::models::{GeneratedIcon, IconConfig};
use crate::presets::LOADING_MESSAGES;
use crate::settings::SettingsStore;

use super::client::GenerationClient;
use super::events::{LoadingMessageEvent, SessionEvents};
use super::state::{SessionSnapshot, SessionState};

const LOADING_TICK_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Clone)]
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    client: GenerationClient,
    settings: Arc<SettingsStore>,
    events: Arc<dyn SessionEvents>,
    ticker: Arc<Mutex<Option<(JoinHandle<()>, CancellationToken)>>>,
    tick_interval: Duration,
    lifetime: CancellationToken,
}

impl SessionController {
    pub fn new(
        client: GenerationClient,
        settings: Arc<SettingsStore>,
        events: Arc<dyn SessionEvents>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            client,
            settings,
            events,
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: LOADING_TICK_INTERVAL,
            lifetime: CancellationToken::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn client(&self) -> &GenerationClient {
        &self.client
    }

    pub async fn get_snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn update_config(&self, config: IconConfig) -> SessionSnapshot {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.update_config(config);
            state.snapshot()
        };
        self.events.state_changed(&snapshot);
        snapshot
    }

    /// Runs one full generation cycle: validate, submit, tick the loading
    /// messages while waiting, then settle into the success or failure state.
    pub async fn generate(&self) -> Result<GeneratedIcon> {
        if self.lifetime.is_cancelled() {
            return Err(SessionError::ShutDown.into());
        }

        let config = {
            let mut state = self.state.lock().await;
            match state.begin_submit() {
                Ok(config) => {
                    let snapshot = state.snapshot();
                    drop(state);
                    self.events.state_changed(&snapshot);
                    config
                }
                Err(err) => {
                    // Busy leaves the state of the in-flight cycle alone;
                    // MissingFields set an inline error worth surfacing.
                    if matches!(err, SessionError::MissingFields) {
                        let snapshot = state.snapshot();
                        drop(state);
                        self.events.state_changed(&snapshot);
                    }
                    return Err(err.into());
                }
            }
        };

        self.spawn_ticker().await;

        let generator = self.settings.generator();
        let outcome = self
            .client
            .generate(&generator.endpoint, &config, generator.api_key.as_deref())
            .await;

        // The ticker is tied 1:1 to the Submitting state; stop it on every
        // exit path before anything else observes the settled state.
        self.cancel_ticker().await;

        if self.lifetime.is_cancelled() {
            warn!("generation completed after shutdown; dropping result");
            return Err(SessionError::ShutDown.into());
        }

        match outcome {
            Ok(url) => {
                let icon = GeneratedIcon {
                    id: Uuid::now_v7().to_string(),
                    url,
                    config,
                    created_at: Utc::now(),
                };

                let snapshot = {
                    let mut state = self.state.lock().await;
                    state.settle_success(icon.clone());
                    state.snapshot()
                };

                info!("generated icon {} for '{}'", icon.id, icon.config.app_name);
                self.events.state_changed(&snapshot);
                self.events.icon_generated(&icon);
                Ok(icon)
            }
            Err(err) => {
                let snapshot = {
                    let mut state = self.state.lock().await;
                    state.settle_failure(err.to_string());
                    state.snapshot()
                };

                self.events.state_changed(&snapshot);
                Err(err.into())
            }
        }
    }

    pub async fn select(&self, id: &str) -> Result<SessionSnapshot> {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.select(id)?;
            state.snapshot()
        };
        self.events.state_changed(&snapshot);
        Ok(snapshot)
    }

    pub async fn remove(&self, id: &str) -> SessionSnapshot {
        let snapshot = {
            let mut state = self.state.lock().await;
            state.remove(id);
            state.snapshot()
        };
        self.events.state_changed(&snapshot);
        snapshot
    }

    /// Idempotent. In-flight requests are not aborted; their completion
    /// becomes a no-op once this has run.
    pub fn shutdown(&self) {
        self.lifetime.cancel();
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some((handle, token)) = ticker_guard.take() {
            token.cancel();
            handle.abort();
        }

        let state = self.state.clone();
        let events = self.events.clone();
        let tick_interval = self.tick_interval;
        let token = self.lifetime.child_token();
        let loop_token = token.clone();

        let handle = tokio::spawn(async move {
            let start = time::Instant::now() + tick_interval;
            let mut interval = time::interval_at(start, tick_interval);
            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = interval.tick() => {
                        // Hold the lock across the emit so no message can
                        // escape after the state has settled.
                        let mut guard = state.lock().await;
                        if !guard.submitting() {
                            break;
                        }
                        let index = guard.advance_loading_message();
                        events.loading_message(&LoadingMessageEvent {
                            index,
                            message: LOADING_MESSAGES[index].to_string(),
                        });
                    }
                }
            }
        });

        *ticker_guard = Some((handle, token));
    }

    async fn cancel_ticker(&self) {
        if let Some((handle, token)) = self.ticker.lock().await.take() {
            token.cancel();
            let _ = handle.await;
        }
    }
}
