//! Inline share form shown under a canvas card.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Email input plus submit button for sharing `canvas_id`.
///
/// The email draft and the inline validation error live in `DashboardState`
/// so that only one panel can hold a draft at a time.
#[component]
pub fn SharePanel(canvas_id: String, state: RwSignal<DashboardState>, on_submit: Callback<String>) -> impl IntoView {
    let submit = Callback::new(move |()| on_submit.run(canvas_id.clone()));

    view! {
        <div class="share-panel">
            <input
                class="share-panel__input"
                type="email"
                placeholder="Enter email"
                prop:value=move || state.with(|s| s.share_email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.share_email = value);
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit.run(());
                    }
                }
            />
            <Show when=move || state.with(|s| s.share_error.is_some())>
                <p class="share-panel__error">
                    {move || state.with(|s| s.share_error.clone().unwrap_or_default())}
                </p>
            </Show>
            <button class="btn btn--share-submit" on:click=move |_| submit.run(())>
                "Share with Email"
            </button>
        </div>
    }
}
