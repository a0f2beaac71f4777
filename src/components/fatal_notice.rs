//! Full-page notice that replaces the dashboard after a fatal failure.

use leptos::prelude::*;

/// Plain page holding only `message`. Nothing on it leads back to the grid.
#[component]
pub fn FatalNotice(message: String) -> impl IntoView {
    view! {
        <div class="fatal-notice" role="alert">
            <div class="fatal-notice__message">{message}</div>
        </div>
    }
}
