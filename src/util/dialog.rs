//! Blocking browser dialogs (`alert` / `confirm`).
//!
//! TRADE-OFFS
//! ==========
//! Native dialogs stall the event loop until dismissed. SSR paths no-op and
//! `confirm` answers "no" there, so a server render never deletes anything.

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask the user to confirm `message`. Returns `false` when declined.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
