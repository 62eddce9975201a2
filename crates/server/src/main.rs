// Copyright (C) 2026 Fred Clausen
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
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use eventhub_api::{
    ApiError, CreateEventRequest, CreateEventResponse, CreatePrincipalRequest,
    CreatePrincipalResponse, CreateTicketRequest, CreateTicketResponse, DeleteEventResponse,
    DeletePrincipalResponse, DeleteTicketResponse, EventWithTicketsResponse,
    PurchaseTicketResponse, TicketInfo, UpdateEventRequest, UpdateEventResponse, create_event,
    create_principal, create_ticket, delete_event, delete_principal, delete_ticket, get_event,
    get_ticket, purchase_ticket, update_event,
};
use eventhub_notify::{Notification, Notifier, NullNotifier, SmtpConfig, SmtpNotifier};
use eventhub_persistence::{Persistence, PersistenceError};
use eventhub_qr::SvgQrRenderer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

mod principal;

use principal::RequesterPrincipal;

/// EventHub Server - HTTP server for the EventHub ticketing backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer lives behind a Mutex for safe concurrent
/// access. Purchase correctness does not depend on that lock — the
/// conditional update in the persistence layer is the double-sale
/// guard — the lock only serializes connection use.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for principals, events, and tickets.
    persistence: Arc<Mutex<Persistence>>,
    /// The outbound notification transport.
    notifier: Arc<dyn Notifier>,
    /// The QR image renderer.
    renderer: Arc<SvgQrRenderer>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
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
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Storage operation failed"),
        }
    }
}

/// Fires a composed notification without blocking the response.
///
/// Delivery runs on a blocking task; failure is logged and swallowed.
/// The caller has already responded (or is about to) by the time the
/// send happens — notification outcome never affects operation outcome.
fn dispatch_notification(app_state: &AppState, notification: Option<Notification>) {
    let Some(notification) = notification else {
        return;
    };

    let notifier: Arc<dyn Notifier> = Arc::clone(&app_state.notifier);
    tokio::spawn(async move {
        let to: String = notification.to.clone();
        let outcome = tokio::task::spawn_blocking(move || notifier.send(&notification)).await;
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(to = %to, error = %err, "Notification delivery failed"),
            Err(err) => warn!(to = %to, error = %err, "Notification task failed"),
        }
    });
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/events` endpoint.
///
/// Creates a new event owned by the requesting organizer.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), HttpError> {
    info!(principal_id = principal.id, "Handling create_event request");

    let mut persistence = app_state.persistence.lock().await;
    let result = create_event(&mut persistence, req, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/events/{event_id}` endpoint.
///
/// Returns the event and every ticket issued against it.
async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<EventWithTicketsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EventWithTicketsResponse = get_event(&mut persistence, event_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/events/{event_id}` endpoint.
///
/// Applies a partial update, scoped to the owning organizer.
async fn handle_update_event(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(event_id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<UpdateEventResponse>, HttpError> {
    info!(
        principal_id = principal.id,
        event_id, "Handling update_event request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = update_event(&mut persistence, event_id, req, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok(Json(result.response))
}

/// Handler for DELETE `/events/{event_id}` endpoint.
///
/// Deletes the event and cascades to its tickets; allowed for the
/// owning organizer or an admin.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(event_id): Path<i64>,
) -> Result<Json<DeleteEventResponse>, HttpError> {
    info!(
        principal_id = principal.id,
        event_id, "Handling delete_event request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = delete_event(&mut persistence, event_id, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok(Json(result.response))
}

/// Handler for POST `/events/{event_id}/tickets` endpoint.
///
/// Issues a ticket against the organizer's own event, including its
/// rendered QR payload.
async fn handle_create_ticket(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(event_id): Path<i64>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<CreateTicketResponse>), HttpError> {
    info!(
        principal_id = principal.id,
        event_id, "Handling create_ticket request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = create_ticket(
        &mut persistence,
        app_state.renderer.as_ref(),
        event_id,
        req,
        &principal,
    )?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for GET `/tickets/{ticket_id}` endpoint.
///
/// Availability polling surface.
async fn handle_get_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<i64>,
) -> Result<Json<TicketInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: TicketInfo = get_ticket(&mut persistence, ticket_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/tickets/{ticket_id}/buy` endpoint.
///
/// The purchase transition. On success the confirmation email carrying
/// the QR image is fired after the response; its failure never rolls
/// back or fails the purchase.
async fn handle_purchase_ticket(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(ticket_id): Path<i64>,
) -> Result<Json<PurchaseTicketResponse>, HttpError> {
    info!(
        principal_id = principal.id,
        ticket_id, "Handling purchase_ticket request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = purchase_ticket(
        &mut persistence,
        app_state.renderer.as_ref(),
        ticket_id,
        &principal,
    )?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok(Json(result.response))
}

/// Handler for DELETE `/tickets/{ticket_id}` endpoint.
///
/// Admin-only unconditional hard delete.
async fn handle_delete_ticket(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(ticket_id): Path<i64>,
) -> Result<Json<DeleteTicketResponse>, HttpError> {
    info!(
        principal_id = principal.id,
        ticket_id, "Handling delete_ticket request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = delete_ticket(&mut persistence, ticket_id, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok(Json(result.response))
}

/// Handler for POST `/principals` endpoint.
///
/// Admin-only provisioning stub for the external identity gate.
async fn handle_create_principal(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Json(req): Json<CreatePrincipalRequest>,
) -> Result<(StatusCode, Json<CreatePrincipalResponse>), HttpError> {
    info!(principal_id = principal.id, "Handling create_principal request");

    let mut persistence = app_state.persistence.lock().await;
    let result = create_principal(&mut persistence, req, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok((StatusCode::CREATED, Json(result.response)))
}

/// Handler for DELETE `/principals/{principal_id}` endpoint.
///
/// Admin-only deletion with role-dependent cascade.
async fn handle_delete_principal(
    AxumState(app_state): AxumState<AppState>,
    RequesterPrincipal(principal): RequesterPrincipal,
    Path(principal_id): Path<i64>,
) -> Result<Json<DeletePrincipalResponse>, HttpError> {
    info!(
        principal_id = principal.id,
        target = principal_id,
        "Handling delete_principal request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let result = delete_principal(&mut persistence, principal_id, &principal)?;
    drop(persistence);

    dispatch_notification(&app_state, result.notification);
    Ok(Json(result.response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/events", post(handle_create_event))
        .route("/events/{event_id}", get(handle_get_event))
        .route("/events/{event_id}", put(handle_update_event))
        .route("/events/{event_id}", delete(handle_delete_event))
        .route("/events/{event_id}/tickets", post(handle_create_ticket))
        .route("/tickets/{ticket_id}", get(handle_get_ticket))
        .route("/tickets/{ticket_id}", delete(handle_delete_ticket))
        .route("/tickets/{ticket_id}/buy", post(handle_purchase_ticket))
        .route("/principals", post(handle_create_principal))
        .route("/principals/{principal_id}", delete(handle_delete_principal))
        .with_state(app_state)
}

/// Builds the notifier from the SMTP environment, degrading to the
/// logging null notifier when unconfigured.
fn build_notifier() -> Arc<dyn Notifier> {
    match SmtpConfig::from_env() {
        Some(config) => {
            info!(host = %config.host, port = config.port, "SMTP configured; email enabled");
            Arc::new(SmtpNotifier::new(config))
        }
        None => {
            info!("SMTP not configured; notifications will be logged and discarded");
            Arc::new(NullNotifier::new())
        }
    }
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

    info!("Initializing EventHub Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: build_notifier(),
        renderer: Arc::new(SvgQrRenderer::new()),
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
