//! Session credential for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated call takes its token from a `Session` passed in by the
//! page, never from storage directly. The page reads a fresh `Session` each
//! time the user acts, so a token cleared mid-session sends the next action
//! to login instead of the network.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// Bearer token as read from browser storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Build a session from a possibly-missing token. Blank tokens count as missing.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Session backed by the token in `localStorage`.
    pub fn from_storage() -> Self {
        Self::new(storage::load_token())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
