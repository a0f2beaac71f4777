//! Navigation targets reachable from the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! State transitions return a `Route` instead of navigating themselves; the
//! page owns the router handle and performs the navigation.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Where the dashboard can send the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Sign-in screen; used whenever the session is missing or rejected.
    Login,
    /// Canvas detail view for the given canvas id.
    Canvas(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Canvas(id) => format!("/canvas/{id}"),
        }
    }
}
