//! Browser-facing helpers used by the dashboard.
//!
//! `date` formats canvas timestamps, `dialog` wraps `alert`/`confirm`, `nav`
//! names the routes the page can redirect to and `storage` reads the session
//! token. Each one is a no-op or a fixed value when rendered on the server.

pub mod date;
pub mod dialog;
pub mod nav;
pub mod storage;
