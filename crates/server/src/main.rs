// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State as AxumState},
    http::{
        HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN,
        },
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use folkcal_api::{
    ApiError, DeleteFestivalResponse, DeleteUserEventResponse, FestivalUpsertRequest,
    FestivalWriteResponse, ListFestivalsResponse, ListUserEventsResponse, LoginRequest,
    LoginResponse, RegisterAccountRequest, RegisterAccountResponse, UserEventInfo,
    UserEventUpsertRequest, create_festival, create_user_event, delete_festival,
    delete_user_event, import_festival_csv, import_holiday_csv, list_festivals_for_year,
    list_user_events, login, logout, register_account, update_festival, update_user_event,
};
use folkcal_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, format_description::well_known::Iso8601};
use tokio::sync::Mutex;
use tracing::{error, info};

mod session;

use session::{SessionAccount, SessionToken};

/// FolkCal Server - HTTP server for the FolkCal calendar API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Allowed CORS origin. May be given multiple times.
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,

    /// Country code for the holiday table used in date resolution
    #[arg(long, default_value = "IN")]
    holiday_country: String,

    /// Path to a festival catalog CSV to import at startup
    #[arg(long)]
    seed_festivals: Option<String>,

    /// Path to a holiday table CSV to import at startup
    #[arg(long)]
    seed_holidays: Option<String>,
}

/// Server configuration derived from the command line.
#[derive(Debug)]
struct AppConfig {
    /// Country code for holiday-table lookups.
    holiday_country: String,
    /// Origins allowed by the CORS middleware.
    cors_origins: Vec<String>,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer for the catalog, accounts, and events.
    persistence: Arc<Mutex<Persistence>>,
    /// Immutable server configuration.
    config: Arc<AppConfig>,
}

/// API request for registering an account.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterAccountApiRequest {
    /// The login email.
    email: String,
    /// The plain-text password.
    password: String,
    /// The password confirmation.
    password_confirmation: String,
}

/// API request for logging in.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoginApiRequest {
    /// The login email.
    email: String,
    /// The plain-text password.
    password: String,
}

/// API request for creating or updating a festival catalog entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct FestivalApiRequest {
    /// The festival name (unique within the catalog).
    event_name: String,
    /// The month abbreviation (e.g. "Jan").
    month: String,
    /// The free-text date description (e.g. "Mid-Mar").
    general_date: String,
    /// The festival location.
    location: String,
    /// The festival type classification.
    festival_type: String,
    /// The experience summary.
    summary: String,
    /// The hook/intro line.
    #[serde(default)]
    hook_intro: String,
    /// Optional time of day.
    #[serde(default)]
    time_of_day: Option<String>,
    /// Optional latitude.
    #[serde(default)]
    latitude: Option<String>,
    /// Optional longitude.
    #[serde(default)]
    longitude: Option<String>,
    /// Optional content potential description.
    #[serde(default)]
    content_potential: Option<String>,
    /// Optional voiceover prompt.
    #[serde(default)]
    voiceover_prompt: Option<String>,
    /// Optional ideal titles.
    #[serde(default)]
    ideal_titles: Option<String>,
}

/// API request for creating or updating a user calendar event.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserEventApiRequest {
    /// The event title.
    title: String,
    /// Optional free-text description.
    #[serde(default)]
    description: Option<String>,
    /// The event date (`YYYY-MM-DD`).
    date: String,
}

/// Query parameters for listing festivals.
#[derive(Debug, Deserialize)]
struct FestivalListQuery {
    /// The year to resolve festival dates for.
    year: i32,
}

/// Query parameters for listing user events.
#[derive(Debug, Deserialize)]
struct EventListQuery {
    /// The calendar year.
    year: i32,
}

/// API response for a successful logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogoutApiResponse {
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Maps a festival API request onto the API-layer upsert request.
fn festival_request(request: FestivalApiRequest) -> FestivalUpsertRequest {
    FestivalUpsertRequest {
        event_name: request.event_name,
        month: request.month,
        general_date: request.general_date,
        location: request.location,
        festival_type: request.festival_type,
        summary: request.summary,
        hook_intro: request.hook_intro,
        time_of_day: request.time_of_day,
        latitude: request.latitude,
        longitude: request.longitude,
        content_potential: request.content_potential,
        voiceover_prompt: request.voiceover_prompt,
        ideal_titles: request.ideal_titles,
    }
}

/// Maps a user event API request onto the API-layer upsert request.
fn event_request(request: UserEventApiRequest) -> UserEventUpsertRequest {
    UserEventUpsertRequest {
        title: request.title,
        description: request.description,
        date: request.date,
    }
}

/// Handler for POST /accounts endpoint.
async fn handle_register_account(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<RegisterAccountApiRequest>,
) -> Result<Json<RegisterAccountResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterAccountResponse = register_account(
        &mut persistence,
        &RegisterAccountRequest {
            email: request.email,
            password: request.password,
            password_confirmation: request.password_confirmation,
        },
    )?;

    Ok(Json(response))
}

/// Handler for POST /login endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<LoginApiRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(
        &mut persistence,
        &LoginRequest {
            email: request.email,
            password: request.password,
        },
    )?;

    Ok(Json(response))
}

/// Handler for POST /logout endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<LogoutApiResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    logout(&mut persistence, &token)?;

    Ok(Json(LogoutApiResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET /festivals endpoint.
///
/// Listing is public: the catalog and its resolved dates need no session.
async fn handle_list_festivals(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<FestivalListQuery>,
) -> Result<Json<ListFestivalsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListFestivalsResponse = list_festivals_for_year(
        &mut persistence,
        query.year,
        &app_state.config.holiday_country,
    )?;

    Ok(Json(response))
}

/// Handler for POST /festivals endpoint.
async fn handle_create_festival(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(request): Json<FestivalApiRequest>,
) -> Result<Json<FestivalWriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: FestivalWriteResponse =
        create_festival(&mut persistence, &account, festival_request(request))?;

    Ok(Json(response))
}

/// Handler for PUT /festivals/{`festival_id`} endpoint.
async fn handle_update_festival(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(festival_id): Path<i64>,
    Json(request): Json<FestivalApiRequest>,
) -> Result<Json<FestivalWriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: FestivalWriteResponse = update_festival(
        &mut persistence,
        &account,
        festival_id,
        festival_request(request),
    )?;

    Ok(Json(response))
}

/// Handler for DELETE /festivals/{`festival_id`} endpoint.
async fn handle_delete_festival(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(festival_id): Path<i64>,
) -> Result<Json<DeleteFestivalResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteFestivalResponse =
        delete_festival(&mut persistence, &account, festival_id)?;

    Ok(Json(response))
}

/// Handler for POST /events endpoint.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(request): Json<UserEventApiRequest>,
) -> Result<Json<UserEventInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UserEventInfo =
        create_user_event(&mut persistence, &account, event_request(request))?;

    Ok(Json(response))
}

/// Handler for GET /events endpoint.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ListUserEventsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListUserEventsResponse =
        list_user_events(&mut persistence, &account, query.year)?;

    Ok(Json(response))
}

/// Handler for PUT /events/{`event_id`} endpoint.
async fn handle_update_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(event_id): Path<i64>,
    Json(request): Json<UserEventApiRequest>,
) -> Result<Json<UserEventInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: UserEventInfo = update_user_event(
        &mut persistence,
        &account,
        event_id,
        event_request(request),
    )?;

    Ok(Json(response))
}

/// Handler for DELETE /events/{`event_id`} endpoint.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(event_id): Path<i64>,
) -> Result<Json<DeleteUserEventResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteUserEventResponse =
        delete_user_event(&mut persistence, &account, event_id)?;

    Ok(Json(response))
}

/// CORS middleware over the configured allow-list.
///
/// Preflight requests are answered directly; other responses are annotated
/// with the allow headers when the Origin matches a configured origin.
async fn cors_layer(
    AxumState(app_state): AxumState<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin: Option<String> = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let allowed: Option<String> = origin.filter(|origin| {
        app_state
            .config
            .cors_origins
            .iter()
            .any(|candidate| candidate == origin)
    });

    let mut response: Response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = allowed
        && let Ok(value) = HeaderValue::from_str(&origin)
    {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Authorization, Content-Type"),
        );
    }

    response
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/accounts", post(handle_register_account))
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/festivals", get(handle_list_festivals))
        .route("/festivals", post(handle_create_festival))
        .route("/festivals/{festival_id}", put(handle_update_festival))
        .route("/festivals/{festival_id}", delete(handle_delete_festival))
        .route("/events", post(handle_create_event))
        .route("/events", get(handle_list_events))
        .route("/events/{event_id}", put(handle_update_event))
        .route("/events/{event_id}", delete(handle_delete_event))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            cors_layer,
        ))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing FolkCal server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Purge sessions that expired while the server was down
    let now: String = OffsetDateTime::now_utc().format(&Iso8601::DEFAULT)?;
    let purged: usize = persistence.delete_expired_sessions(&now)?;
    if purged > 0 {
        info!(purged = purged, "Removed expired sessions");
    }

    // Seed the catalog and holiday table from CSV files, if requested
    if let Some(path) = &args.seed_festivals {
        let csv_data: String = std::fs::read_to_string(path)?;
        let result = import_festival_csv(&mut persistence, &csv_data)?;
        info!(
            path = %path,
            imported = result.imported_count,
            invalid = result.invalid_count,
            "Seeded festival catalog"
        );
    }
    if let Some(path) = &args.seed_holidays {
        let csv_data: String = std::fs::read_to_string(path)?;
        let result = import_holiday_csv(&mut persistence, &csv_data)?;
        info!(
            path = %path,
            imported = result.imported_count,
            invalid = result.invalid_count,
            "Seeded holiday table"
        );
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(AppConfig {
            holiday_country: args.holiday_country,
            cors_origins: args.cors_origins,
        }),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    const TEST_ORIGIN: &str = "http://localhost:5173";
    const TEST_PASSWORD: &str = "hunter2hunter2";

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            config: Arc::new(AppConfig {
                holiday_country: String::from("IN"),
                cors_origins: vec![String::from(TEST_ORIGIN)],
            }),
        }
    }

    /// Helper to send a JSON request and return status plus raw body.
    async fn send_request(
        app: Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (HttpStatusCode, String) {
        let mut builder = HttpRequest::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body_bytes.to_vec()).unwrap())
    }

    /// Helper to register an account and log in, returning the session token.
    async fn register_and_login(app: &Router, email: &str) -> String {
        let (status, _) = send_request(
            app.clone(),
            "POST",
            "/accounts",
            None,
            Some(serde_json::json!({
                "email": email,
                "password": TEST_PASSWORD,
                "password_confirmation": TEST_PASSWORD,
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send_request(
            app.clone(),
            "POST",
            "/login",
            None,
            Some(serde_json::json!({
                "email": email,
                "password": TEST_PASSWORD,
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let response: LoginResponse = serde_json::from_str(&body).unwrap();
        response.session_token
    }

    fn festival_body(event_name: &str) -> serde_json::Value {
        serde_json::json!({
            "event_name": event_name,
            "month": "Dec",
            "general_date": "Dec 1-10",
            "location": "Nagaland",
            "festival_type": "Tribal",
            "summary": "All-tribe performance showcase",
        })
    }

    #[tokio::test]
    async fn test_register_login_logout_flow() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let token: String = register_and_login(&app, "user@example.com").await;

        let (status, _) = send_request(app.clone(), "POST", "/logout", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);

        // The token is dead after logout
        let (status, _) = send_request(
            app,
            "POST",
            "/events",
            Some(&token),
            Some(serde_json::json!({
                "title": "Dentist",
                "date": "2025-06-15",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_festival_writes_require_authentication() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let (status, _) = send_request(
            app,
            "POST",
            "/festivals",
            None,
            Some(festival_body("Hornbill Festival")),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_festival_listing_is_public() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let token: String = register_and_login(&app, "curator@example.com").await;
        let (status, _) = send_request(
            app.clone(),
            "POST",
            "/festivals",
            Some(&token),
            Some(festival_body("Hornbill Festival")),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        // No Authorization header on the listing
        let (status, body) =
            send_request(app, "GET", "/festivals?year=2025", None, None).await;
        assert_eq!(status, HttpStatusCode::OK);

        let response: ListFestivalsResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.year, 2025);
        assert_eq!(response.festivals.len(), 1);
        assert_eq!(
            response.festivals[0].resolved_date.as_deref(),
            Some("2025-12-01")
        );
    }

    #[tokio::test]
    async fn test_duplicate_festival_is_unprocessable() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let token: String = register_and_login(&app, "curator@example.com").await;
        let (status, _) = send_request(
            app.clone(),
            "POST",
            "/festivals",
            Some(&token),
            Some(festival_body("Hornbill Festival")),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send_request(
            app,
            "POST",
            "/festivals",
            Some(&token),
            Some(festival_body("Hornbill Festival")),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);

        let error_response: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(error_response.error);
        assert!(error_response.message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_invalid_event_date_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let token: String = register_and_login(&app, "user@example.com").await;
        let (status, body) = send_request(
            app,
            "POST",
            "/events",
            Some(&token),
            Some(serde_json::json!({
                "title": "Dentist",
                "date": "June 15th",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(error_response.message.contains("date"));
    }

    #[tokio::test]
    async fn test_events_are_owner_scoped_over_http() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let owner_token: String = register_and_login(&app, "owner@example.com").await;
        let intruder_token: String = register_and_login(&app, "intruder@example.com").await;

        let (status, body) = send_request(
            app.clone(),
            "POST",
            "/events",
            Some(&owner_token),
            Some(serde_json::json!({
                "title": "Private",
                "date": "2025-06-15",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let created: UserEventInfo = serde_json::from_str(&body).unwrap();

        // A foreign event reads as missing
        let (status, _) = send_request(
            app.clone(),
            "PUT",
            &format!("/events/{}", created.event_id),
            Some(&intruder_token),
            Some(serde_json::json!({
                "title": "Hijacked",
                "date": "2025-06-16",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);

        // The owner still sees the original
        let (status, body) = send_request(
            app,
            "GET",
            "/events?year=2025",
            Some(&owner_token),
            None,
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let response: ListUserEventsResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.events[0].title, "Private");
    }

    #[tokio::test]
    async fn test_cors_preflight_for_allowed_origin() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("OPTIONS")
                    .uri("/festivals")
                    .header("Origin", TEST_ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NO_CONTENT);
        assert_eq!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some(TEST_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_cors_headers_absent_for_unknown_origin() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("GET")
                    .uri("/festivals?year=2025")
                    .header("Origin", "http://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        assert!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
