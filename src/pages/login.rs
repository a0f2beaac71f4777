//! Login landing page.
//!
//! Sessions are issued by the whiteboard service itself; this page is only
//! the redirect target for missing or rejected tokens.

use leptos::prelude::*;

/// Login page: tells the user how to get a session and links back home.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Whiteboard"</h1>
            <p>"Your session is missing or has expired."</p>
            <p>"Sign in through the whiteboard service, then come back to your canvases."</p>
            <a href="/" class="login-page__home">
                "Back to your canvases"
            </a>
        </div>
    }
}
