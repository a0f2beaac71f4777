//! Card component for one canvas in the dashboard grid.
//!
//! DESIGN
//! ======
//! The card renders read-only metadata and forwards its actions to the page.
//! Only the share toggle writes page state directly, because it is pure UI
//! state with no request behind it.

use leptos::prelude::*;

use crate::components::share_panel::SharePanel;
use crate::net::types::Canvas;
use crate::state::dashboard::DashboardState;
use crate::util::date::format_date;

/// A canvas card with Open, Share/Cancel and Delete actions.
#[component]
pub fn CanvasCard(
    canvas: Canvas,
    state: RwSignal<DashboardState>,
    on_open: Callback<String>,
    on_share: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let sharing = {
        let id = canvas.id.clone();
        move || state.with(|s| s.is_sharing(&id))
    };
    let open_id = canvas.id.clone();
    let toggle_id = canvas.id.clone();
    let delete_id = canvas.id.clone();
    let panel_id = canvas.id.clone();
    let share_label = {
        let sharing = sharing.clone();
        move || if sharing() { "Cancel" } else { "Share" }
    };

    view! {
        <div class="canvas-card">
            <h3 class="canvas-card__name">{canvas.name.clone()}</h3>
            <p class="canvas-card__meta">
                <strong>"Created:"</strong>
                " "
                {format_date(&canvas.created_at)}
            </p>
            <p class="canvas-card__meta">
                <strong>"Last Updated:"</strong>
                " "
                {format_date(&canvas.updated_at)}
            </p>
            <p class="canvas-card__meta canvas-card__meta--owner">
                <strong>"Owner:"</strong>
                " "
                {canvas.owner_label().to_owned()}
            </p>

            <div class="canvas-card__actions">
                <button class="btn btn--open" on:click=move |_| on_open.run(open_id.clone())>
                    "Open"
                </button>
                <button
                    class="btn btn--share"
                    on:click=move |_| state.update(|s| s.toggle_share(&toggle_id))
                >
                    {share_label}
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>

            <Show when=sharing>
                <SharePanel canvas_id=panel_id.clone() state=state on_submit=on_share/>
            </Show>
        </div>
    }
}
