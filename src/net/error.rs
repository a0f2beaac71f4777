//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `ApiError`. Pages never show these variants
//! directly; they pick a user-facing string with [`ApiError::user_message`]
//! so server-supplied messages win over generic fallbacks.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend call did not produce a usable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The server answered 2xx but the body could not be decoded.
    #[error("unreadable response: {0}")]
    Decode(String),
    /// REST calls are browser-only; the SSR build never issues them.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user for this failure.
    ///
    /// A rejected request shows the server's `message` when present, else
    /// `rejected_fallback`. Everything else uses `transport_fallback`.
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => rejected_fallback.to_owned(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => transport_fallback.to_owned(),
        }
    }
}
