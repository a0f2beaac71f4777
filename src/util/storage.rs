//! Browser `localStorage` access for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is written by the login flow, which lives outside this client.
//! Here it is only ever read; SSR paths see no storage and report no token.

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Read the bearer token from `localStorage`.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
