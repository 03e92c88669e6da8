use std::sync::Arc;

use reqwest::Client;
use shared::{
    domain::{InputMode, Shortcut},
    protocol::{ModeChangeForm, SendForm},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info};
use url::Url;

pub mod error;

pub use error::RelayError;

/// Which device panel a frontend should present for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub keyboard: bool,
    pub mouse: bool,
}

impl PanelVisibility {
    /// Pure projection of a mode onto panel visibility. Unrecognized modes
    /// hide both panels.
    pub fn for_mode(mode: &InputMode) -> Self {
        Self {
            keyboard: *mode == InputMode::Keyboard,
            mouse: *mode == InputMode::Mouse,
        }
    }

    /// Projection before the first successful mode sync.
    pub fn hidden() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub enum ControllerEvent {
    ModeChanged {
        mode: InputMode,
        panels: PanelVisibility,
    },
}

#[derive(Debug)]
struct ControllerState {
    mode: Option<InputMode>,
    // Monotonic id of the latest started mode operation; a response from an
    // older operation must not clobber newer state.
    mode_generation: u64,
}

/// Client-side controller for the input bridge.
///
/// Owns the current mode; frontends render the [`PanelVisibility`]
/// projection instead of keeping their own copy.
#[derive(Debug)]
pub struct BridgeController {
    http: Client,
    base_url: String,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl BridgeController {
    /// Validates the bridge URL without touching the network.
    pub fn new(base_url: impl Into<String>) -> Result<Arc<Self>, RelayError> {
        let raw = base_url.into();
        let parsed = Url::parse(&raw).map_err(|source| RelayError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(RelayError::UnsupportedScheme { url: raw });
        }
        let (events, _) = broadcast::channel(64);
        Ok(Arc::new(Self {
            http: Client::new(),
            base_url: raw.trim_end_matches('/').to_string(),
            inner: Mutex::new(ControllerState {
                mode: None,
                mode_generation: 0,
            }),
            events,
        }))
    }

    /// Builds a controller and performs the startup mode sync, mirroring a
    /// frontend that fetches the current mode once on load.
    pub async fn connect(base_url: impl Into<String>) -> Result<Arc<Self>, RelayError> {
        let controller = Self::new(base_url)?;
        controller.sync_mode().await?;
        Ok(controller)
    }

    /// Posts a mode change and applies it locally without re-fetching.
    ///
    /// Returns the panel projection for the posted mode. If a newer mode
    /// operation started while this request was in flight, the owned state
    /// is left to the newer operation.
    pub async fn change_mode(&self, mode: InputMode) -> Result<PanelVisibility, RelayError> {
        let generation = self.begin_mode_operation().await;
        debug!(mode = %mode, "posting mode change");
        let response = self
            .http
            .post(format!("{}/mode", self.base_url))
            .form(&ModeChangeForm { mode: mode.clone() })
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                endpoint: "/mode",
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                endpoint: "/mode",
                status,
            });
        }
        Ok(self.apply_mode(generation, mode).await)
    }

    /// Sends free text typed by the user.
    pub async fn send_text(&self, text: &str) -> Result<(), RelayError> {
        self.post_send(text).await
    }

    /// Sends a caller-supplied command string, e.g. a fixed button label.
    pub async fn send_command(&self, command: &str) -> Result<(), RelayError> {
        self.post_send(command).await
    }

    /// Sends one of the well-known firmware shortcuts.
    pub async fn send_shortcut(&self, shortcut: Shortcut) -> Result<(), RelayError> {
        self.post_send(shortcut.as_str()).await
    }

    /// Fetches the current mode from the bridge and adopts it.
    ///
    /// The response body is taken verbatim as the mode label.
    pub async fn sync_mode(&self) -> Result<InputMode, RelayError> {
        let generation = self.begin_mode_operation().await;
        let response = self
            .http
            .get(format!("{}/getMode", self.base_url))
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                endpoint: "/getMode",
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                endpoint: "/getMode",
                status,
            });
        }
        let body = response.text().await.map_err(RelayError::Body)?;
        let mode = InputMode::from(body);
        info!(mode = %mode, "mode synchronized from bridge");
        self.apply_mode(generation, mode.clone()).await;
        Ok(mode)
    }

    /// Owned mode; `None` until the first successful mode operation.
    pub async fn current_mode(&self) -> Option<InputMode> {
        self.inner.lock().await.mode.clone()
    }

    /// Panel projection of the owned mode; both panels hidden before the
    /// first sync.
    pub async fn panels(&self) -> PanelVisibility {
        match &self.inner.lock().await.mode {
            Some(mode) => PanelVisibility::for_mode(mode),
            None => PanelVisibility::hidden(),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    async fn post_send(&self, data: &str) -> Result<(), RelayError> {
        debug!(bytes = data.len(), "posting payload");
        let response = self
            .http
            .post(format!("{}/send", self.base_url))
            .form(&SendForm {
                data: data.to_string(),
            })
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                endpoint: "/send",
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                endpoint: "/send",
                status,
            });
        }
        Ok(())
    }

    async fn begin_mode_operation(&self) -> u64 {
        let mut state = self.inner.lock().await;
        state.mode_generation += 1;
        state.mode_generation
    }

    async fn apply_mode(&self, generation: u64, mode: InputMode) -> PanelVisibility {
        let panels = PanelVisibility::for_mode(&mode);
        {
            let mut state = self.inner.lock().await;
            if state.mode_generation != generation {
                debug!(mode = %mode, "discarding superseded mode result");
                return panels;
            }
            state.mode = Some(mode.clone());
        }
        let _ = self.events.send(ControllerEvent::ModeChanged { mode, panels });
        panels
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
