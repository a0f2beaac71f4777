use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;

// =============================================================
// In-memory backend
// =============================================================

struct FakeApi {
    calls: RefCell<Vec<String>>,
    profile: Result<UserProfile, ApiError>,
    canvases: Result<Vec<Canvas>, ApiError>,
    create: Result<(), ApiError>,
    share: Result<(), ApiError>,
    delete: Result<(), ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            profile: Ok(profile("Ann")),
            canvases: Ok(Vec::new()),
            create: Ok(()),
            share: Ok(()),
            delete: Ok(()),
        }
    }
}

impl FakeApi {
    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait::async_trait(?Send)]
impl CanvasApi for FakeApi {
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.record(format!("GET /api/users/profile [{token}]"));
        self.profile.clone()
    }

    async fn list_canvases(&self, token: &str) -> Result<Vec<Canvas>, ApiError> {
        self.record(format!("GET /api/canvas [{token}]"));
        self.canvases.clone()
    }

    async fn create_canvas(&self, token: &str, name: &str) -> Result<(), ApiError> {
        self.record(format!("POST /api/canvas [{token}] name={name}"));
        self.create.clone()
    }

    async fn share_canvas(&self, token: &str, canvas_id: &str, email: &str) -> Result<(), ApiError> {
        self.record(format!("PUT /api/canvas/share/{canvas_id} [{token}] shared_with={email}"));
        self.share.clone()
    }

    async fn delete_canvas(&self, token: &str, canvas_id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/canvas/{canvas_id} [{token}]"));
        self.delete.clone()
    }
}

fn profile(name: &str) -> UserProfile {
    UserProfile {
        name: name.to_owned(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        extra: serde_json::Map::new(),
    }
}

fn canvas(id: &str, name: &str) -> Canvas {
    Canvas {
        id: id.to_owned(),
        name: name.to_owned(),
        created_at: "2024-03-05T14:30:00Z".to_owned(),
        updated_at: "2024-03-05T14:30:00Z".to_owned(),
        owner: None,
    }
}

fn signed_in() -> Session {
    Session::new(Some("t0k".to_owned()))
}

fn rejected(message: Option<&str>) -> ApiError {
    ApiError::Rejected {
        status: 400,
        message: message.map(str::to_owned),
    }
}

fn ready_state(canvases: Vec<Canvas>) -> DashboardState {
    DashboardState {
        profile: Some(profile("Ann")),
        canvases,
        ..DashboardState::default()
    }
}

// =============================================================
// Mount: profile + list
// =============================================================

#[test]
fn mount_without_token_redirects_and_issues_no_calls() {
    let api = FakeApi::default();
    let session = Session::default();
    let mut state = DashboardState::default();

    let route = state.apply_profile(block_on(load_profile(&api, &session)));
    state.apply_canvas_list(block_on(refresh_canvases(&api, &session)));

    assert_eq!(route, Some(Route::Login));
    assert!(api.calls().is_empty());
    assert_eq!(state.view(), PageView::Loading);
}

#[test]
fn profile_success_renders_greeting() {
    let api = FakeApi::default();
    let mut state = DashboardState::default();

    let route = state.apply_profile(block_on(load_profile(&api, &signed_in())));

    assert_eq!(route, None);
    assert_eq!(state.view(), PageView::Ready);
    assert_eq!(state.greeting().as_deref(), Some("Hello, Ann!"));
    assert_eq!(api.calls(), vec!["GET /api/users/profile [t0k]"]);
}

#[test]
fn profile_rejection_stores_server_message_and_redirects() {
    let api = FakeApi {
        profile: Err(rejected(Some("Token expired"))),
        ..FakeApi::default()
    };
    let mut state = DashboardState::default();

    let route = state.apply_profile(block_on(load_profile(&api, &signed_in())));

    assert_eq!(route, Some(Route::Login));
    assert_eq!(state.view(), PageView::Error("Token expired".to_owned()));
}

#[test]
fn profile_rejection_without_message_uses_fallback() {
    let api = FakeApi {
        profile: Err(rejected(None)),
        ..FakeApi::default()
    };
    let outcome = block_on(load_profile(&api, &signed_in()));
    assert_eq!(outcome, ProfileOutcome::Failed(PROFILE_REJECTED.to_owned()));
}

#[test]
fn profile_network_failure_uses_generic_message_and_redirects() {
    let api = FakeApi {
        profile: Err(ApiError::Network("offline".to_owned())),
        ..FakeApi::default()
    };
    let mut state = DashboardState::default();

    let route = state.apply_profile(block_on(load_profile(&api, &signed_in())));

    assert_eq!(route, Some(Route::Login));
    assert_eq!(state.error.as_deref(), Some(PROFILE_FAILED));
}

#[test]
fn empty_list_leaves_no_cards() {
    let api = FakeApi::default();
    let mut state = ready_state(Vec::new());

    state.apply_canvas_list(block_on(refresh_canvases(&api, &signed_in())));

    assert!(state.canvases.is_empty());
    assert_eq!(state.view(), PageView::Ready);
}

#[test]
fn list_success_replaces_local_cache() {
    let api = FakeApi {
        canvases: Ok(vec![canvas("c2", "Two"), canvas("c3", "Three")]),
        ..FakeApi::default()
    };
    let mut state = ready_state(vec![canvas("c1", "One")]);

    state.apply_canvas_list(block_on(refresh_canvases(&api, &signed_in())));

    let ids: Vec<_> = state.canvases.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c3"]);
}

#[test]
fn list_failure_keeps_previous_list() {
    let api = FakeApi {
        canvases: Err(ApiError::Network("offline".to_owned())),
        ..FakeApi::default()
    };
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(refresh_canvases(&api, &signed_in()));
    assert_eq!(outcome, ListOutcome::Failed(LIST_FAILED.to_owned()));
    state.apply_canvas_list(outcome);

    assert_eq!(state.canvases, vec![canvas("c1", "One")]);
    assert_eq!(state.view(), PageView::Ready);
}

// =============================================================
// Create
// =============================================================

#[test]
fn create_with_blank_name_issues_no_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(Vec::new());
    state.new_canvas_name = "  ".to_owned();

    let outcome = block_on(submit_create(&api, &signed_in(), &state.new_canvas_name));

    assert_eq!(outcome, CreateOutcome::Ignored);
    assert_eq!(state.apply_create(outcome), None);
    assert!(api.calls().is_empty());
    assert_eq!(state.new_canvas_name, "  ");
}

#[test]
fn create_success_refetches_list_exactly_once() {
    let api = FakeApi {
        canvases: Ok(vec![canvas("c9", "Design")]),
        ..FakeApi::default()
    };
    let mut state = ready_state(Vec::new());
    state.new_canvas_name = "Design".to_owned();

    let outcome = block_on(submit_create(&api, &signed_in(), &state.new_canvas_name));
    let alert = state.apply_create(outcome);

    assert_eq!(alert, None);
    assert_eq!(
        api.calls(),
        vec!["POST /api/canvas [t0k] name=Design", "GET /api/canvas [t0k]"]
    );
    assert!(state.new_canvas_name.is_empty());
    assert_eq!(state.canvases, vec![canvas("c9", "Design")]);
}

#[test]
fn create_sends_trimmed_name() {
    let api = FakeApi::default();
    block_on(submit_create(&api, &signed_in(), "  Roadmap  "));
    assert_eq!(api.calls().first().map(String::as_str), Some("POST /api/canvas [t0k] name=Roadmap"));
}

#[test]
fn create_failure_alerts_server_message_and_keeps_draft() {
    let api = FakeApi {
        create: Err(rejected(Some("Name already taken"))),
        ..FakeApi::default()
    };
    let mut state = ready_state(Vec::new());
    state.new_canvas_name = "Design".to_owned();

    let outcome = block_on(submit_create(&api, &signed_in(), &state.new_canvas_name));
    let alert = state.apply_create(outcome);

    assert_eq!(alert, Some(Followup::Alert("Name already taken".to_owned())));
    assert_eq!(state.new_canvas_name, "Design");
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn create_network_failure_alerts_generic_message() {
    let api = FakeApi {
        create: Err(ApiError::Network("offline".to_owned())),
        ..FakeApi::default()
    };
    let outcome = block_on(submit_create(&api, &signed_in(), "Design"));
    assert_eq!(outcome, CreateOutcome::Failed(CREATE_FAILED.to_owned()));
}

#[test]
fn create_without_token_redirects_without_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(Vec::new());
    state.new_canvas_name = "Design".to_owned();

    let outcome = block_on(submit_create(&api, &Session::default(), &state.new_canvas_name));

    assert_eq!(outcome, CreateOutcome::NoSession);
    assert_eq!(state.apply_create(outcome), Some(Followup::Navigate(Route::Login)));
    assert!(api.calls().is_empty());
    assert_eq!(state.new_canvas_name, "Design");
}

#[test]
fn token_cleared_after_mount_redirects_next_create() {
    let api = FakeApi::default();
    let mut state = ready_state(Vec::new());
    state.apply_profile(block_on(load_profile(&api, &signed_in())));

    // Storage emptied by another tab; the next action reads it again.
    let outcome = block_on(submit_create(&api, &Session::new(None), "Design"));

    assert_eq!(state.apply_create(outcome), Some(Followup::Navigate(Route::Login)));
    assert_eq!(api.calls(), vec!["GET /api/users/profile [t0k]"]);
}

// =============================================================
// Share
// =============================================================

#[test]
fn toggle_share_opens_and_closes_panel() {
    let mut state = ready_state(vec![canvas("c1", "One")]);

    state.toggle_share("c1");
    assert!(state.is_sharing("c1"));

    state.toggle_share("c1");
    assert!(!state.is_sharing("c1"));
    assert_eq!(state.sharing_canvas_id, None);
}

#[test]
fn opening_second_panel_closes_first() {
    let mut state = ready_state(vec![canvas("c1", "One"), canvas("c2", "Two")]);
    state.toggle_share("c1");
    state.share_email = "bob@example.com".to_owned();

    state.toggle_share("c2");

    assert!(state.is_sharing("c2"));
    assert!(!state.is_sharing("c1"));
    assert!(state.share_email.is_empty());
}

#[test]
fn share_with_blank_email_sets_inline_error_without_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);
    state.toggle_share("c1");

    let outcome = block_on(submit_share(&api, &signed_in(), "c1", &state.share_email));
    let route = state.apply_share(outcome);

    assert_eq!(route, None);
    assert!(api.calls().is_empty());
    assert_eq!(state.share_error.as_deref(), Some(SHARE_EMAIL_REQUIRED));
    assert_eq!(state.fatal_error, None);
    assert_eq!(state.view(), PageView::Ready);
    assert!(state.is_sharing("c1"));
}

#[test]
fn share_without_token_redirects_without_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(submit_share(&api, &Session::default(), "c1", "bob@example.com"));

    assert_eq!(outcome, ShareOutcome::NoSession);
    assert_eq!(state.apply_share(outcome), Some(Route::Login));
    assert!(api.calls().is_empty());
}

#[test]
fn share_success_closes_panel_and_clears_draft() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);
    state.toggle_share("c1");
    state.share_email = " bob@example.com ".to_owned();

    let outcome = block_on(submit_share(&api, &signed_in(), "c1", &state.share_email));
    state.apply_share(outcome);

    assert_eq!(
        api.calls(),
        vec!["PUT /api/canvas/share/c1 [t0k] shared_with=bob@example.com"]
    );
    assert_eq!(state.sharing_canvas_id, None);
    assert!(state.share_email.is_empty());
    assert_eq!(state.canvases.len(), 1);
}

#[test]
fn share_rejection_replaces_page_with_fatal_view() {
    let api = FakeApi {
        share: Err(rejected(Some("User not found"))),
        ..FakeApi::default()
    };
    let mut state = ready_state(vec![canvas("c1", "One")]);
    state.toggle_share("c1");

    let outcome = block_on(submit_share(&api, &signed_in(), "c1", "ghost@example.com"));
    state.apply_share(outcome);

    assert_eq!(state.view(), PageView::Fatal("User not found".to_owned()));

    // The grid stays unreachable even after later successful loads.
    state.apply_canvas_list(ListOutcome::Loaded(vec![canvas("c2", "Two")]));
    assert_eq!(state.view(), PageView::Fatal("User not found".to_owned()));
}

#[test]
fn share_network_failure_is_fatal_with_generic_message() {
    let api = FakeApi {
        share: Err(ApiError::Network("offline".to_owned())),
        ..FakeApi::default()
    };
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(submit_share(&api, &signed_in(), "c1", "bob@example.com"));
    state.apply_share(outcome);

    assert_eq!(state.view(), PageView::Fatal(SHARE_FAILED.to_owned()));
}

#[test]
fn share_does_not_refetch_list() {
    let api = FakeApi::default();
    block_on(submit_share(&api, &signed_in(), "c1", "bob@example.com"));
    assert!(api.calls().iter().all(|call| !call.starts_with("GET")));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn declined_delete_issues_no_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(confirm_delete(&api, &signed_in(), "c1", false));

    assert_eq!(state.apply_delete(outcome), None);
    assert!(api.calls().is_empty());
    assert_eq!(state.canvases.len(), 1);
}

#[test]
fn confirmed_delete_removes_only_that_canvas_without_refetch() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One"), canvas("c2", "Two")]);

    let outcome = block_on(confirm_delete(&api, &signed_in(), "c1", true));
    let alert = state.apply_delete(outcome);

    assert_eq!(alert, None);
    assert_eq!(api.calls(), vec!["DELETE /api/canvas/c1 [t0k]"]);
    assert_eq!(state.canvases, vec![canvas("c2", "Two")]);
}

#[test]
fn deleting_canvas_with_open_share_panel_closes_it() {
    let mut state = ready_state(vec![canvas("c1", "One")]);
    state.toggle_share("c1");

    state.apply_delete(DeleteOutcome::Deleted("c1".to_owned()));

    assert_eq!(state.sharing_canvas_id, None);
}

#[test]
fn delete_failure_alerts_and_keeps_list() {
    let api = FakeApi {
        delete: Err(rejected(None)),
        ..FakeApi::default()
    };
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(confirm_delete(&api, &signed_in(), "c1", true));
    let alert = state.apply_delete(outcome);

    assert_eq!(alert, Some(Followup::Alert(DELETE_REJECTED.to_owned())));
    assert_eq!(state.canvases.len(), 1);
    assert_eq!(state.view(), PageView::Ready);
}

#[test]
fn delete_without_token_redirects_without_calls() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(confirm_delete(&api, &Session::default(), "c1", true));

    assert_eq!(outcome, DeleteOutcome::NoSession);
    assert_eq!(state.apply_delete(outcome), Some(Followup::Navigate(Route::Login)));
    assert!(api.calls().is_empty());
    assert_eq!(state.canvases.len(), 1);
}

#[test]
fn declined_delete_without_token_stays_put() {
    let api = FakeApi::default();
    let mut state = ready_state(vec![canvas("c1", "One")]);

    let outcome = block_on(confirm_delete(&api, &Session::default(), "c1", false));

    assert_eq!(state.apply_delete(outcome), None);
    assert!(api.calls().is_empty());
}

#[test]
fn delete_network_failure_alerts_generic_message() {
    let api = FakeApi {
        delete: Err(ApiError::Decode("eof".to_owned())),
        ..FakeApi::default()
    };
    let outcome = block_on(confirm_delete(&api, &signed_in(), "c1", true));
    assert_eq!(outcome, DeleteOutcome::Failed(DELETE_FAILED.to_owned()));
}

// =============================================================
// View precedence
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = DashboardState::default();
    assert_eq!(state.view(), PageView::Loading);
    assert_eq!(state.greeting(), None);
}

#[test]
fn fatal_outranks_error_and_error_outranks_ready() {
    let mut state = ready_state(Vec::new());
    state.error = Some("profile".to_owned());
    assert_eq!(state.view(), PageView::Error("profile".to_owned()));

    state.fatal_error = Some("share".to_owned());
    assert_eq!(state.view(), PageView::Fatal("share".to_owned()));
}
