use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::sync::mpsc;

use expense_tui::{
    AppActor, AppState, BackendConfig, Category, ExpensesApi, FetchError, ListView, NetworkActor,
    NetworkCommand, NetworkResponse, NewExpense, RenderState, SubmissionError, UiEvent,
};

/// In-memory stand-in for the expenses backend
#[derive(Clone, Default)]
struct StubBackend {
    raw_posts: Arc<Mutex<Vec<String>>>,
    limits: Arc<Mutex<Vec<String>>>,
    expenses: Arc<Mutex<Vec<Value>>>,
    reject_posts: bool,
}

async fn create_expense(State(backend): State<StubBackend>, body: String) -> StatusCode {
    backend.raw_posts.lock().unwrap().push(body.clone());
    if backend.reject_posts {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let mut record: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };
    let mut expenses = backend.expenses.lock().unwrap();
    record["id"] = json!(expenses.len() + 1);
    expenses.insert(0, record);
    StatusCode::CREATED
}

async fn list_expenses(
    State(backend): State<StubBackend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    backend
        .limits
        .lock()
        .unwrap()
        .push(params.get("limit").cloned().unwrap_or_default());
    Json(backend.expenses.lock().unwrap().clone())
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_backend(backend: StubBackend) -> String {
    let app = Router::new()
        .route("/api/expenses", get(list_expenses).post(create_expense))
        .with_state(backend);
    serve(app).await
}

/// Address nobody listens on
async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn coffee() -> NewExpense {
    NewExpense {
        title: "Coffee".into(),
        amount: 4.5,
        category: "Food".into(),
    }
}

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(base_url: &str) -> Self {
        let config = BackendConfig::new(base_url);
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        tokio::spawn(NetworkActor::new(ExpensesApi::new(config), net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::new(AppState::new(base_url), net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        Harness { ui_tx, render_rx }
    }

    fn send(&self, events: impl IntoIterator<Item = UiEvent>) {
        for event in events {
            self.ui_tx.send(event).unwrap();
        }
    }

    fn type_text(&self, text: &str) {
        self.send(text.chars().map(UiEvent::CharInput));
    }

    async fn wait_for(&mut self, pred: impl Fn(&RenderState) -> bool) -> RenderState {
        let rx = &mut self.render_rx;
        tokio::time::timeout(Duration::from_secs(5), async {
            while let Some(state) = rx.recv().await {
                if pred(&state) {
                    return state;
                }
            }
            panic!("render channel closed");
        })
        .await
        .expect("timed out waiting for render state")
    }

    /// Fill the form with "Coffee", "4.50", Food and press submit
    fn submit_coffee(&self) {
        self.send([UiEvent::StartEditing]);
        self.type_text("Coffee");
        self.send([UiEvent::NextField, UiEvent::StartEditing]);
        self.type_text("4.50");
        self.send([UiEvent::NextField, UiEvent::NextCategory, UiEvent::Submit]);
    }
}

#[tokio::test]
async fn test_create_posts_exact_json() {
    let backend = StubBackend::default();
    let base = spawn_backend(backend.clone()).await;
    let api = ExpensesApi::new(BackendConfig::new(base));

    api.create_expense(&coffee()).await.unwrap();

    assert_eq!(
        *backend.raw_posts.lock().unwrap(),
        vec![r#"{"title":"Coffee","amount":4.5,"category":"Food"}"#.to_string()]
    );
}

#[tokio::test]
async fn test_create_maps_non_ok_status() {
    let backend = StubBackend {
        reject_posts: true,
        ..Default::default()
    };
    let base = spawn_backend(backend).await;
    let api = ExpensesApi::new(BackendConfig::new(base));

    assert_eq!(api.create_expense(&coffee()).await, Err(SubmissionError::Status(500)));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let api = ExpensesApi::new(BackendConfig::new(dead_address().await));

    assert!(matches!(api.create_expense(&coffee()).await, Err(SubmissionError::Network(_))));
    assert!(matches!(api.list_expenses(20).await, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn test_list_sends_limit_and_passes_entries_through() {
    let backend = StubBackend::default();
    backend.expenses.lock().unwrap().extend([
        json!({ "id": "b", "title": "Rent", "amount": 900, "category": "Bills" }),
        json!({ "id": "a", "title": "Tip", "amount": "some", "category": "Food" }),
    ]);
    let base = spawn_backend(backend.clone()).await;
    let api = ExpensesApi::new(BackendConfig::new(base));

    let items = api.list_expenses(20).await.unwrap();

    assert_eq!(*backend.limits.lock().unwrap(), vec!["20".to_string()]);
    let rows: Vec<String> = items.iter().map(|e| e.row_text()).collect();
    assert_eq!(rows, vec!["Rent / Bills / $900.00", "Tip / Food / $some"]);
}

#[tokio::test]
async fn test_list_keeps_rows_around_malformed_entries() {
    let backend = StubBackend::default();
    backend.expenses.lock().unwrap().extend([
        json!({ "id": 1, "title": "Coffee", "amount": 4.5, "category": "Food" }),
        json!(5),
        Value::Null,
    ]);
    let base = spawn_backend(backend).await;
    let api = ExpensesApi::new(BackendConfig::new(base));

    let items = api.list_expenses(20).await.unwrap();

    let rows: Vec<String> = items.iter().map(|e| e.row_text()).collect();
    assert_eq!(rows, vec!["Coffee / Food / $4.50", "5 /  / $", " /  / $"]);
}

#[tokio::test]
async fn test_list_rejects_non_array_body() {
    let app = Router::new().route(
        "/api/expenses",
        get(|| async { Json(json!({ "detail": "database offline" })) }),
    );
    let api = ExpensesApi::new(BackendConfig::new(serve(app).await));

    assert!(matches!(api.list_expenses(20).await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_list_maps_non_ok_status() {
    let app = Router::new().route(
        "/api/expenses",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!([]))) }),
    );
    let api = ExpensesApi::new(BackendConfig::new(serve(app).await));

    assert_eq!(api.list_expenses(20).await, Err(FetchError::Status(503)));
}

#[tokio::test]
async fn test_add_coffee_end_to_end() {
    let backend = StubBackend::default();
    let base = spawn_backend(backend.clone()).await;
    let mut harness = Harness::start(&base);

    // Mount: one GET, empty backend
    harness.wait_for(|s| s.list == ListView::Empty).await;
    assert_eq!(*backend.limits.lock().unwrap(), vec!["20".to_string()]);

    harness.submit_coffee();
    let state = harness
        .wait_for(|s| s.rows() == vec!["Coffee / Food / $4.50".to_string()])
        .await;

    assert_eq!(
        *backend.raw_posts.lock().unwrap(),
        vec![r#"{"title":"Coffee","amount":4.5,"category":"Food"}"#.to_string()]
    );
    assert_eq!(backend.limits.lock().unwrap().len(), 2);
    assert_eq!(state.title, "");
    assert_eq!(state.amount, "");
    assert_eq!(state.category, Category::Food);
    assert_eq!(state.refresh_key, 1);
    assert!(state.submit_enabled());
    assert!(state.alert.is_none());

    harness.send([UiEvent::Quit]);
}

#[tokio::test]
async fn test_rejected_add_keeps_draft_end_to_end() {
    let backend = StubBackend {
        reject_posts: true,
        ..Default::default()
    };
    let base = spawn_backend(backend.clone()).await;
    let mut harness = Harness::start(&base);

    harness.wait_for(|s| s.list == ListView::Empty).await;

    harness.submit_coffee();
    let state = harness.wait_for(|s| s.alert.is_some()).await;

    assert_eq!(state.alert.as_deref(), Some("Could not add expense"));
    assert_eq!(state.title, "Coffee");
    assert_eq!(state.amount, "4.50");
    assert_eq!(state.refresh_key, 0);
    assert!(state.submit_enabled());
    assert_eq!(backend.raw_posts.lock().unwrap().len(), 1);
    assert_eq!(backend.limits.lock().unwrap().len(), 1);

    harness.send([UiEvent::DismissAlert]);
    harness.wait_for(|s| s.alert.is_none()).await;
    harness.send([UiEvent::Quit]);
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let backend = StubBackend::default();
    let base = spawn_backend(backend.clone()).await;
    let mut harness = Harness::start(&base);

    harness.wait_for(|s| s.list == ListView::Empty).await;

    // Title only, then amount only
    harness.send([UiEvent::StartEditing]);
    harness.type_text("Coffee");
    harness.send([UiEvent::Submit]);
    harness.send([UiEvent::StartEditing]);
    for _ in 0.."Coffee".len() {
        harness.send([UiEvent::Backspace]);
    }
    harness.send([UiEvent::NextField, UiEvent::StartEditing]);
    harness.type_text("4.50");
    harness.send([UiEvent::Submit, UiEvent::ToggleHelp]);

    let state = harness.wait_for(|s| s.show_help).await;
    assert_eq!(state.title, "");
    assert_eq!(state.amount, "4.50");
    assert!(state.submit_enabled());
    assert!(backend.raw_posts.lock().unwrap().is_empty());

    harness.send([UiEvent::Quit]);
}
