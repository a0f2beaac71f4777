//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the credential, `dashboard` holds the page model plus the
//! workflows that mutate it. Both are plain data so they can be tested
//! without a browser.

pub mod dashboard;
pub mod session;
