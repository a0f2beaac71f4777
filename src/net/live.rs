//! Optional realtime channel owned by the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Live collaboration runs on the canvas view, not here. The dashboard only
//! owns a `LiveLink` so anything it ever opens is closed when the page
//! unmounts; today nothing on the dashboard calls [`LiveLink::connect`].
//!
//! All websocket I/O is gated behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use super::error::ApiError;

/// Lifecycle of a [`LiveLink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkState {
    /// Never connected.
    #[default]
    Idle,
    /// Socket open.
    Open,
    /// Explicitly disconnected; may be reconnected.
    Closed,
}

/// Handle to a websocket that may or may not be open.
#[derive(Default)]
pub struct LiveLink {
    state: LinkState,
    #[cfg(feature = "hydrate")]
    socket: Option<gloo_net::websocket::futures::WebSocket>,
}

impl std::fmt::Debug for LiveLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveLink").field("state", &self.state).finish_non_exhaustive()
    }
}

impl LiveLink {
    /// A link with no socket behind it.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == LinkState::Open
    }

    /// Open a websocket to `url`, replacing any existing socket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the browser refuses the socket, or
    /// [`ApiError::Unavailable`] outside the browser.
    pub fn connect(&mut self, url: &str) -> Result<(), ApiError> {
        self.disconnect();
        #[cfg(feature = "hydrate")]
        {
            let socket = gloo_net::websocket::futures::WebSocket::open(url)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.socket = Some(socket);
            self.state = LinkState::Open;
            leptos::logging::log!("live link opened: {url}");
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }

    /// Close the socket if one is open. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(socket) = self.socket.take() {
                if let Err(e) = socket.close(Some(1000), Some("page closed")) {
                    leptos::logging::warn!("live link close failed: {e}");
                }
            }
        }
        if self.state == LinkState::Open {
            self.state = LinkState::Closed;
        }
    }
}
