//! Transport, refresh and session-store behavior against a loopback stub
//! backend. The stub only accepts one access token; everything issued at
//! login is stale, which forces the 401 → refresh → retry path.

use std::future::IntoFuture;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use shared::{
    AuthResponse, Campaign, ListQuery, LoginRequest, PageInfo, Paginated, RefreshRequest, Role,
    User,
};

use sentinelle::core::{ApiError, ApiService};
use sentinelle::services::api::ApiClient;
use sentinelle::services::session::{SessionStatus, SessionStore};

struct Stub {
    /// The only access token the protected endpoints accept.
    accepted_token: String,
    refresh_calls: AtomicUsize,
}

impl Stub {
    fn new(accepted_token: &str) -> Arc<Self> {
        Arc::new(Stub {
            accepted_token: accepted_token.to_string(),
            refresh_calls: AtomicUsize::new(0),
        })
    }
}

fn member() -> User {
    User {
        id: "u1".to_string(),
        phone_number: "0712345678".to_string(),
        first_name: "Awa".to_string(),
        last_name: "Diop".to_string(),
        role: Role::Member,
        balance: 1500.0,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn campaign() -> Campaign {
    Campaign {
        id: "c1".to_string(),
        name: "School roof".to_string(),
        description: "New roof for the school".to_string(),
        goal_amount: 100_000.0,
        collected_amount: 25_000.0,
        amount_per_spin: 500.0,
        starts_at: Utc::now(),
        ends_at: Utc::now(),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn temp_session(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sentinelle-authflow-{}-{}.json",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

async fn login_handler(
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<Value>) {
    if request.phone_number == "0712345678" && request.password == "secret123" {
        let response = AuthResponse {
            access_token: "tok1".to_string(),
            refresh_token: Some("refresh1".to_string()),
            expires_at: None,
            user: member(),
        };
        (StatusCode::OK, Json(serde_json::to_value(response).unwrap()))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid phone number or password"})),
        )
    }
}

async fn refresh_handler(
    State(stub): State<Arc<Stub>>,
    Json(request): Json<RefreshRequest>,
) -> (StatusCode, Json<Value>) {
    stub.refresh_calls.fetch_add(1, Ordering::SeqCst);
    // Hold the refresh open long enough for every concurrent 401 to join
    // the same in-flight attempt.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    if request.refresh_token == "refresh1" {
        (
            StatusCode::OK,
            Json(json!({
                "access_token": stub.accepted_token,
                "refresh_token": "refresh2",
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "refresh token rejected"})),
        )
    }
}

async fn campaigns_handler(
    State(stub): State<Arc<Stub>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers).as_deref() != Some(stub.accepted_token.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "token expired"})),
        );
    }
    let page = Paginated {
        data: vec![campaign()],
        pagination: PageInfo {
            page: 1,
            limit: 20,
            total: 1,
            total_pages: 1,
        },
    };
    (StatusCode::OK, Json(serde_json::to_value(page).unwrap()))
}

fn stub_router(stub: Arc<Stub>) -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route("/campaigns", get(campaigns_handler))
        .with_state(stub)
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(axum::serve(listener, router).into_future());
    format!("http://{addr}")
}

#[tokio::test]
async fn login_populates_session() {
    let base = serve(stub_router(Stub::new("tok1"))).await;
    let session = SessionStore::new(temp_session("login-ok"));
    let api = ApiClient::new(base, session.clone());

    let user = session.login(&api, "0712345678", "secret123").await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Member);
    assert!(session.is_authenticated());
    assert_eq!(session.access_token(), Some("tok1".to_string()));

    let snapshot = session.snapshot();
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.user.unwrap().role, Role::Member);
}

#[tokio::test]
async fn failed_login_sets_error_and_stays_unauthenticated() {
    let base = serve(stub_router(Stub::new("tok1"))).await;
    let session = SessionStore::new(temp_session("login-bad"));
    let api = ApiClient::new(base, session.clone());

    let err = session
        .login(&api, "0712345678", "wrong-password")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());

    let error = session.snapshot().error.expect("error message stored");
    assert!(error.contains("Invalid phone number"));
}

#[tokio::test]
async fn missing_fields_fail_login_locally() {
    // Unreachable backend: local validation must reject before any request.
    let session = SessionStore::new(temp_session("login-local"));
    let api = ApiClient::new("http://127.0.0.1:9", session.clone());

    let err = session.login(&api, "   ", "secret123").await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert!(!session.is_authenticated());
    assert!(session.snapshot().error.is_some());
}

#[tokio::test]
async fn concurrent_unauthorized_requests_refresh_once_and_retry() {
    // The stub only accepts "tok2"; login hands out "tok1", so every
    // request 401s until a refresh lands.
    let stub = Stub::new("tok2");
    let base = serve(stub_router(stub.clone())).await;
    let session = SessionStore::new(temp_session("refresh-dedup"));
    let api = ApiClient::new(base, session.clone());

    session.login(&api, "0712345678", "secret123").await.unwrap();
    assert_eq!(session.access_token(), Some("tok1".to_string()));

    let (a, b, c) = tokio::join!(
        api.list_campaigns(ListQuery::default()),
        api.list_campaigns(ListQuery::default()),
        api.list_campaigns(ListQuery::default()),
    );

    // All original calls were retried with the refreshed token and
    // succeeded, off a single refresh round trip.
    for result in [a, b, c] {
        let page = result.expect("retried request succeeds");
        assert_eq!(page.data.len(), 1);
    }
    assert_eq!(stub.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.access_token(), Some("tok2".to_string()));
    // The rotated refresh token was stored too.
    assert_eq!(session.refresh_token(), Some("refresh2".to_string()));
}

#[tokio::test]
async fn logout_clears_session_even_if_server_fails() {
    async fn failing_logout() -> (StatusCode, Json<Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "logout exploded"})),
        )
    }

    let router = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(failing_logout));
    let base = serve(router).await;

    let path = temp_session("logout");
    let session = SessionStore::new(path.clone());
    let api = ApiClient::new(base, session.clone());

    session.login(&api, "0712345678", "secret123").await.unwrap();
    assert!(session.is_authenticated());
    assert!(path.exists());

    session.logout(&api).await;

    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());
    assert!(!path.exists());
}

#[tokio::test]
async fn initialize_restores_session_without_network() {
    let base = serve(stub_router(Stub::new("tok1"))).await;
    let path = temp_session("rehydrate");

    {
        let session = SessionStore::new(path.clone());
        let api = ApiClient::new(base, session.clone());
        session.login(&api, "0712345678", "secret123").await.unwrap();
    }

    // Fresh store, unreachable backend: rehydration is purely local.
    let restored = SessionStore::new(path.clone());
    let _api = ApiClient::new("http://127.0.0.1:9", restored.clone());

    assert_eq!(restored.initialize(), SessionStatus::Authenticated);
    assert!(restored.is_authenticated());
    assert_eq!(restored.role(), Some(Role::Member));
    assert_eq!(restored.access_token(), Some("tok1".to_string()));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn rejected_revalidation_clears_session() {
    async fn rejecting_me() -> (StatusCode, Json<Value>) {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid token"})))
    }
    async fn rejecting_refresh() -> (StatusCode, Json<Value>) {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "refresh token rejected"})),
        )
    }

    let router = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/me", get(rejecting_me))
        .route("/auth/refresh", post(rejecting_refresh));
    let base = serve(router).await;

    let session = SessionStore::new(temp_session("revalidate"));
    let api = ApiClient::new(base, session.clone());
    session.login(&api, "0712345678", "secret123").await.unwrap();

    let err = session.check_auth(&api).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert!(!session.is_authenticated());
    assert!(session.access_token().is_none());
}

#[tokio::test]
async fn network_failure_keeps_rehydrated_session() {
    let base = serve(stub_router(Stub::new("tok1"))).await;
    let path = temp_session("offline");

    {
        let session = SessionStore::new(path.clone());
        let api = ApiClient::new(base, session.clone());
        session.login(&api, "0712345678", "secret123").await.unwrap();
    }

    let restored = SessionStore::new(path.clone());
    restored.initialize();
    let api = ApiClient::new("http://127.0.0.1:9", restored.clone());

    let err = restored.check_auth(&api).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    // An offline start must not log the user out.
    assert!(restored.is_authenticated());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn transport_classifies_error_statuses() {
    async fn forbidden() -> (StatusCode, Json<Value>) {
        (StatusCode::FORBIDDEN, Json(json!({"error": "admins only"})))
    }
    async fn unprocessable() -> (StatusCode, Json<Value>) {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "amount must be positive"})),
        )
    }
    async fn exploding() -> (StatusCode, Json<Value>) {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"})))
    }

    let router = Router::new()
        .route("/users", get(forbidden))
        .route("/prizes", get(unprocessable))
        .route("/payments", get(exploding));
    let base = serve(router).await;

    let session = SessionStore::new(temp_session("statuses"));
    let api = ApiClient::new(base, session.clone());

    let err = api.list_users(ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(err.user_message(), "admins only");

    let err = api.list_prizes(ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));

    let err = api.list_payments(ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Server(_)));

    let offline = ApiClient::new("http://127.0.0.1:9", SessionStore::new(temp_session("net")));
    let err = offline.spin_balance().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
