//! Canvas detail route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening a card lands here. The drawing surface is served by the canvas
//! editor, so this page only identifies the canvas and links back.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Canvas page: shows which canvas was opened.
#[component]
pub fn CanvasPage() -> impl IntoView {
    let params = use_params_map();
    let canvas_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="canvas-page">
            <header class="canvas-page__header">
                <a href="/" class="canvas-page__back">
                    "← Your canvases"
                </a>
                <span class="canvas-page__id">{canvas_id}</span>
            </header>
        </div>
    }
}
