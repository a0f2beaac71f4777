//! Dashboard page state and the REST workflows that drive it.
//!
//! DESIGN
//! ======
//! Each user action is split in two halves:
//!
//! - an async workflow (`load_profile`, `submit_create`, ...) that talks to a
//!   [`CanvasApi`] and returns an outcome value without touching UI state;
//! - a synchronous `DashboardState::apply_*` that folds the outcome into the
//!   page state and reports any navigation or alert the page must perform.
//!
//! Validation happens in the workflow before any request is built, so empty
//! drafts and missing tokens never reach the network.
//!
//! ERROR HANDLING
//! ==============
//! Failure severity differs per action: profile failures redirect to login,
//! list failures are only logged, create/delete failures raise an alert and
//! share failures replace the whole page with a fatal notice. Missing input
//! for a share stays an inline, recoverable error. A missing token always
//! redirects to login, whichever action found it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::CanvasApi;
use crate::net::types::{Canvas, UserProfile};
use crate::state::session::Session;
use crate::util::nav::Route;

pub const PROFILE_REJECTED: &str = "Failed to fetch profile";
pub const PROFILE_FAILED: &str = "An error occurred while fetching the profile";
pub const LIST_REJECTED: &str = "Failed to fetch canvases";
pub const LIST_FAILED: &str = "An error occurred while fetching canvases";
pub const CREATE_REJECTED: &str = "Failed to create canvas";
pub const CREATE_FAILED: &str = "An error occurred while creating canvas";
pub const SHARE_EMAIL_REQUIRED: &str = "Please enter an email.";
pub const SHARE_FAILED: &str = "An error occurred while sharing the canvas";
pub const DELETE_REJECTED: &str = "Failed to delete canvas";
pub const DELETE_FAILED: &str = "An error occurred while deleting canvas";
pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this canvas?";
pub const EMPTY_LIST: &str = "No canvases found.";

/// Result of the mount-time profile request.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileOutcome {
    /// No token stored; nothing was requested.
    NoSession,
    Loaded(UserProfile),
    Failed(String),
}

/// Result of a canvas-list request.
#[derive(Clone, Debug, PartialEq)]
pub enum ListOutcome {
    /// No token stored; nothing was requested.
    Skipped,
    Loaded(Vec<Canvas>),
    Failed(String),
}

/// Result of submitting the create-canvas draft.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateOutcome {
    /// Draft was blank; nothing was requested.
    Ignored,
    /// No token stored; nothing was requested.
    NoSession,
    /// Canvas created; carries the follow-up list refresh.
    Created(ListOutcome),
    Failed(String),
}

/// Result of submitting the share panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ShareOutcome {
    /// Email draft was blank; nothing was requested.
    MissingEmail,
    /// No token stored; nothing was requested.
    NoSession,
    Shared,
    Failed(String),
}

/// Result of a delete request.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// User declined the confirmation; nothing was requested.
    Declined,
    /// No token stored; nothing was requested.
    NoSession,
    Deleted(String),
    Failed(String),
}

/// What the page must do after folding a create or delete result in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Followup {
    Navigate(Route),
    Alert(String),
}

/// Which top-level view the page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    /// Share failure; replaces everything until the next mount.
    Fatal(String),
    /// Profile failure; shown until the redirect lands.
    Error(String),
    Loading,
    Ready,
}

/// Dashboard page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub profile: Option<UserProfile>,
    pub canvases: Vec<Canvas>,
    pub new_canvas_name: String,
    pub sharing_canvas_id: Option<String>,
    pub share_email: String,
    pub share_error: Option<String>,
    pub error: Option<String>,
    pub fatal_error: Option<String>,
}

impl DashboardState {
    /// View to render, in priority order fatal > error > loading > ready.
    pub fn view(&self) -> PageView {
        if let Some(message) = &self.fatal_error {
            return PageView::Fatal(message.clone());
        }
        if let Some(message) = &self.error {
            return PageView::Error(message.clone());
        }
        if self.profile.is_none() {
            return PageView::Loading;
        }
        PageView::Ready
    }

    pub fn greeting(&self) -> Option<String> {
        self.profile.as_ref().map(|profile| format!("Hello, {}!", profile.name))
    }

    pub fn is_sharing(&self, canvas_id: &str) -> bool {
        self.sharing_canvas_id.as_deref() == Some(canvas_id)
    }

    /// Open the share panel for `canvas_id`, or close it if already open.
    ///
    /// Only one panel is open at a time; switching panels drops the email
    /// draft and any inline error from the previous one.
    pub fn toggle_share(&mut self, canvas_id: &str) {
        if self.is_sharing(canvas_id) {
            self.sharing_canvas_id = None;
        } else {
            self.sharing_canvas_id = Some(canvas_id.to_owned());
        }
        self.share_email.clear();
        self.share_error = None;
    }

    /// Fold the profile result in. Returns the route to navigate to, if any.
    pub fn apply_profile(&mut self, outcome: ProfileOutcome) -> Option<Route> {
        match outcome {
            ProfileOutcome::NoSession => Some(Route::Login),
            ProfileOutcome::Loaded(profile) => {
                self.profile = Some(profile);
                None
            }
            ProfileOutcome::Failed(message) => {
                self.error = Some(message);
                Some(Route::Login)
            }
        }
    }

    /// Replace the list on success; keep the current list otherwise.
    pub fn apply_canvas_list(&mut self, outcome: ListOutcome) {
        match outcome {
            ListOutcome::Loaded(canvases) => self.canvases = canvases,
            ListOutcome::Failed(message) => leptos::logging::warn!("canvas list: {message}"),
            ListOutcome::Skipped => {}
        }
    }

    /// Fold a create result in. Returns the redirect or alert to perform, if any.
    pub fn apply_create(&mut self, outcome: CreateOutcome) -> Option<Followup> {
        match outcome {
            CreateOutcome::Ignored => None,
            CreateOutcome::NoSession => Some(Followup::Navigate(Route::Login)),
            CreateOutcome::Created(refresh) => {
                self.new_canvas_name.clear();
                self.apply_canvas_list(refresh);
                None
            }
            CreateOutcome::Failed(message) => Some(Followup::Alert(message)),
        }
    }

    /// Fold a share result in. Returns the route to navigate to, if any.
    pub fn apply_share(&mut self, outcome: ShareOutcome) -> Option<Route> {
        match outcome {
            ShareOutcome::MissingEmail => {
                self.share_error = Some(SHARE_EMAIL_REQUIRED.to_owned());
                None
            }
            ShareOutcome::NoSession => Some(Route::Login),
            ShareOutcome::Shared => {
                self.sharing_canvas_id = None;
                self.share_email.clear();
                self.share_error = None;
                None
            }
            ShareOutcome::Failed(message) => {
                self.fatal_error = Some(message);
                None
            }
        }
    }

    /// Fold a delete result in. Returns the redirect or alert to perform, if any.
    pub fn apply_delete(&mut self, outcome: DeleteOutcome) -> Option<Followup> {
        match outcome {
            DeleteOutcome::Declined => None,
            DeleteOutcome::NoSession => Some(Followup::Navigate(Route::Login)),
            DeleteOutcome::Deleted(canvas_id) => {
                self.canvases.retain(|canvas| canvas.id != canvas_id);
                if self.is_sharing(&canvas_id) {
                    self.toggle_share(&canvas_id);
                }
                None
            }
            DeleteOutcome::Failed(message) => Some(Followup::Alert(message)),
        }
    }
}

/// Fetch the signed-in user's profile.
pub async fn load_profile<A: CanvasApi + ?Sized>(api: &A, session: &Session) -> ProfileOutcome {
    let Some(token) = session.token() else {
        return ProfileOutcome::NoSession;
    };
    match api.fetch_profile(token).await {
        Ok(profile) => ProfileOutcome::Loaded(profile),
        Err(e) => ProfileOutcome::Failed(e.user_message(PROFILE_REJECTED, PROFILE_FAILED)),
    }
}

/// Fetch the canvases visible to the signed-in user.
pub async fn refresh_canvases<A: CanvasApi + ?Sized>(api: &A, session: &Session) -> ListOutcome {
    let Some(token) = session.token() else {
        return ListOutcome::Skipped;
    };
    match api.list_canvases(token).await {
        Ok(canvases) => ListOutcome::Loaded(canvases),
        Err(e) => ListOutcome::Failed(e.user_message(LIST_REJECTED, LIST_FAILED)),
    }
}

/// Create a canvas named `draft` (trimmed), then re-fetch the list.
pub async fn submit_create<A: CanvasApi + ?Sized>(api: &A, session: &Session, draft: &str) -> CreateOutcome {
    let name = draft.trim();
    if name.is_empty() {
        return CreateOutcome::Ignored;
    }
    let Some(token) = session.token() else {
        return CreateOutcome::NoSession;
    };
    match api.create_canvas(token, name).await {
        Ok(()) => CreateOutcome::Created(refresh_canvases(api, session).await),
        Err(e) => CreateOutcome::Failed(e.user_message(CREATE_REJECTED, CREATE_FAILED)),
    }
}

/// Share `canvas_id` with the (trimmed) `email`.
pub async fn submit_share<A: CanvasApi + ?Sized>(
    api: &A,
    session: &Session,
    canvas_id: &str,
    email: &str,
) -> ShareOutcome {
    let email = email.trim();
    if email.is_empty() {
        return ShareOutcome::MissingEmail;
    }
    let Some(token) = session.token() else {
        return ShareOutcome::NoSession;
    };
    match api.share_canvas(token, canvas_id, email).await {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => ShareOutcome::Failed(e.user_message(SHARE_FAILED, SHARE_FAILED)),
    }
}

/// Delete `canvas_id` if the user `confirmed`.
pub async fn confirm_delete<A: CanvasApi + ?Sized>(
    api: &A,
    session: &Session,
    canvas_id: &str,
    confirmed: bool,
) -> DeleteOutcome {
    if !confirmed {
        return DeleteOutcome::Declined;
    }
    let Some(token) = session.token() else {
        return DeleteOutcome::NoSession;
    };
    match api.delete_canvas(token, canvas_id).await {
        Ok(()) => DeleteOutcome::Deleted(canvas_id.to_owned()),
        Err(e) => DeleteOutcome::Failed(e.user_message(DELETE_REJECTED, DELETE_FAILED)),
    }
}
