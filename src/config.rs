//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `ApiConfig` through Leptos context; pages build their
//! `HttpApi` from it so tests and local setups can point at another backend
//! without touching request code.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hosted whiteboard backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://whiteboard-application-1.onrender.com";

/// Base URL of the REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, dropping any trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API `path` such as `/api/canvas`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
