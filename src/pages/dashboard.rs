//! Dashboard page: profile greeting plus the user's canvases.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it requests the profile
//! and the canvas list independently, then lets the user create, open, share
//! and delete canvases. All request logic lives in `state::dashboard`; this
//! module wires it to signals, browser dialogs and the router.
//!
//! Mount loads use the session stored when the page mounts. Create, share
//! and delete read storage again when the user acts.
//!
//! Requests are not cancelled on unmount. Late results are written with
//! `try_update`/`try_set`, which drop silently once the page is disposed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::canvas_card::CanvasCard;
use crate::components::fatal_notice::FatalNotice;
use crate::config::ApiConfig;
use crate::net::api::HttpApi;
use crate::net::live::LiveLink;
use crate::state::dashboard::{
    DELETE_CONFIRM, DashboardState, EMPTY_LIST, Followup, PageView, confirm_delete, load_profile, refresh_canvases,
    submit_create, submit_share,
};
use crate::state::session::Session;
use crate::util::dialog;
use crate::util::nav::Route;

/// Dashboard page with greeting, create form and canvas grid.
/// Redirects to `/login` if no session token is stored or the profile fails.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = HttpApi::new(use_context::<ApiConfig>().unwrap_or_default());
    let session = Session::from_storage();
    let state = RwSignal::new(DashboardState::default());
    let pending_route = RwSignal::new(None::<Route>);
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(route) = pending_route.get() {
            pending_route.set(None);
            navigate(&route.path(), NavigateOptions::default());
        }
    });

    let live = StoredValue::new_local(LiveLink::idle());
    on_cleanup(move || live.update_value(LiveLink::disconnect));

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = load_profile(&api, &session).await;
                if let Some(route) = state.try_update(|s| s.apply_profile(outcome)).flatten() {
                    let _ = pending_route.try_set(Some(route));
                }
            });
        });
    }

    {
        let api = api.clone();
        let session = session.clone();
        Effect::new(move || {
            let api = api.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let outcome = refresh_canvases(&api, &session).await;
                let _ = state.try_update(|s| s.apply_canvas_list(outcome));
            });
        });
    }

    let follow_up = move |followup: Option<Followup>| match followup {
        Some(Followup::Navigate(route)) => {
            let _ = pending_route.try_set(Some(route));
        }
        Some(Followup::Alert(message)) => dialog::alert(&message),
        None => {}
    };

    let on_create = Callback::new({
        let api = api.clone();
        move |()| {
            let draft = state.with_untracked(|s| s.new_canvas_name.clone());
            let session = Session::from_storage();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_create(&api, &session, &draft).await;
                follow_up(state.try_update(|s| s.apply_create(outcome)).flatten());
            });
        }
    });

    let on_open = Callback::new(move |canvas_id: String| {
        pending_route.set(Some(Route::Canvas(canvas_id)));
    });

    let on_share = Callback::new({
        let api = api.clone();
        move |canvas_id: String| {
            let email = state.with_untracked(|s| s.share_email.clone());
            let session = Session::from_storage();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_share(&api, &session, &canvas_id, &email).await;
                if let Some(route) = state.try_update(|s| s.apply_share(outcome)).flatten() {
                    let _ = pending_route.try_set(Some(route));
                }
            });
        }
    });

    let on_delete = Callback::new(move |canvas_id: String| {
        let confirmed = dialog::confirm(DELETE_CONFIRM);
        let session = Session::from_storage();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let outcome = confirm_delete(&api, &session, &canvas_id, confirmed).await;
            follow_up(state.try_update(|s| s.apply_delete(outcome)).flatten());
        });
    });

    // Keyed on the view kind so typing into drafts does not rebuild the page.
    let page = Memo::new(move |_| state.with(DashboardState::view));

    view! {
        {move || match page.get() {
            PageView::Fatal(message) => view! { <FatalNotice message=message/> }.into_any(),
            PageView::Error(message) => view! { <p class="dashboard-page__error">{message}</p> }.into_any(),
            PageView::Loading => view! { <p class="dashboard-page__loading">"Loading..."</p> }.into_any(),
            PageView::Ready => {
                view! {
                    <DashboardReady
                        state=state
                        on_create=on_create
                        on_open=on_open
                        on_share=on_share
                        on_delete=on_delete
                    />
                }
                    .into_any()
            }
        }}
    }
}

/// Loaded dashboard: greeting, create form and canvas grid.
#[component]
fn DashboardReady(
    state: RwSignal<DashboardState>,
    on_create: Callback<()>,
    on_open: Callback<String>,
    on_share: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__panel">
                <h1 class="dashboard-page__greeting">
                    {move || state.with(|s| s.greeting().unwrap_or_default())}
                </h1>

                <div class="dashboard-page__create">
                    <input
                        class="dashboard-page__create-input"
                        type="text"
                        placeholder="Enter canvas name"
                        prop:value=move || state.with(|s| s.new_canvas_name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.new_canvas_name = value);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_create.run(());
                            }
                        }
                    />
                    <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                        "Create Canvas"
                    </button>
                </div>

                <h2 class="dashboard-page__section">"Your Canvases"</h2>
                <div class="dashboard-page__grid">
                    <Show
                        when=move || state.with(|s| !s.canvases.is_empty())
                        fallback=|| view! { <p class="dashboard-page__empty">{EMPTY_LIST}</p> }
                    >
                        <For
                            each=move || state.with(|s| s.canvases.clone())
                            key=|canvas| canvas.clone()
                            children=move |canvas| {
                                view! {
                                    <CanvasCard
                                        canvas=canvas
                                        state=state
                                        on_open=on_open
                                        on_share=on_share
                                        on_delete=on_delete
                                    />
                                }
                            }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
