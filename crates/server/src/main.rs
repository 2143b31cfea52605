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
    extract::{Path, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use plan_assign_api::{
    AddProcedureToPlanRequest, AddProcedureToPlanResponse, ApiError,
    AssignUsersToPlanProcedureRequest, AssignUsersToPlanProcedureResponse, CreatePlanResponse,
    ListProceduresResponse, PlanProcedureUsersResponse, add_procedure_to_plan,
    assign_users_to_plan_procedure, create_plan, get_plan_procedure_users, list_procedures,
};
use plan_assign_persistence::{Persistence, SeedSummary};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Plan Assign Server - HTTP server for plan procedure assignments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Load reference procedures and users into empty tables at startup
    #[arg(long)]
    seed: bool,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
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
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Cancelled => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.message(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Runs synchronous persistence work on the blocking pool.
///
/// The shared persistence handle is locked only while `work` runs. If the
/// request future is dropped before `work` finishes, the token passed to
/// `work` is cancelled.
async fn run_blocking<T, F>(app_state: &AppState, work: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&mut Persistence, &CancellationToken) -> Result<T, ApiError> + Send + 'static,
{
    let persistence: Arc<Mutex<Persistence>> = Arc::clone(&app_state.persistence);
    let cancel: CancellationToken = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let outcome = tokio::task::spawn_blocking(move || {
        let mut persistence = persistence.blocking_lock();
        work(&mut persistence, &cancel)
    })
    .await;

    match outcome {
        Ok(result) => result.map_err(HttpError::from),
        Err(join_err) => {
            error!(error = %join_err, "Blocking task failed");
            Err(HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: String::from("Internal error"),
            })
        }
    }
}

/// Handler for POST `/plans/procedures/users` endpoint.
///
/// Replaces the users assigned to a plan procedure.
async fn handle_assign_users_to_plan_procedure(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<AssignUsersToPlanProcedureRequest>, JsonRejection>,
) -> Result<Json<AssignUsersToPlanProcedureResponse>, HttpError> {
    let Json(req) = body?;
    info!(
        plan_id = req.plan_id,
        procedure_id = req.procedure_id,
        "Handling assign_users_to_plan_procedure request"
    );

    run_blocking(&app_state, move |persistence, cancel| {
        assign_users_to_plan_procedure(persistence, &req, cancel)
    })
    .await?;

    Ok(Json(AssignUsersToPlanProcedureResponse {
        success: true,
        message: String::from("Users assigned to plan procedure"),
    }))
}

/// Handler for POST `/plans` endpoint.
async fn handle_create_plan(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CreatePlanResponse>, HttpError> {
    info!("Handling create_plan request");

    let response: CreatePlanResponse =
        run_blocking(&app_state, |persistence, _| create_plan(persistence)).await?;

    Ok(Json(response))
}

/// Handler for POST `/plans/{plan_id}/procedures` endpoint.
async fn handle_add_procedure_to_plan(
    AxumState(app_state): AxumState<AppState>,
    Path(plan_id): Path<i64>,
    body: Result<Json<AddProcedureToPlanRequest>, JsonRejection>,
) -> Result<Json<AddProcedureToPlanResponse>, HttpError> {
    let Json(req) = body?;
    info!(
        plan_id,
        procedure_id = req.procedure_id,
        "Handling add_procedure_to_plan request"
    );

    let response: AddProcedureToPlanResponse = run_blocking(&app_state, move |persistence, _| {
        add_procedure_to_plan(persistence, plan_id, &req)
    })
    .await?;

    Ok(Json(response))
}

/// Handler for GET `/plans/{plan_id}/procedures/{procedure_id}/users` endpoint.
async fn handle_get_plan_procedure_users(
    AxumState(app_state): AxumState<AppState>,
    Path((plan_id, procedure_id)): Path<(i64, i64)>,
) -> Result<Json<PlanProcedureUsersResponse>, HttpError> {
    let response: PlanProcedureUsersResponse =
        run_blocking(&app_state, move |persistence, _| {
            get_plan_procedure_users(persistence, plan_id, procedure_id)
        })
        .await?;

    Ok(Json(response))
}

/// Handler for GET `/procedures` endpoint.
async fn handle_list_procedures(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListProceduresResponse>, HttpError> {
    let response: ListProceduresResponse =
        run_blocking(&app_state, |persistence, _| list_procedures(persistence)).await?;

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/plans", post(handle_create_plan))
        .route("/procedures", get(handle_list_procedures))
        .route(
            "/plans/procedures/users",
            post(handle_assign_users_to_plan_procedure),
        )
        .route(
            "/plans/{plan_id}/procedures",
            post(handle_add_procedure_to_plan),
        )
        .route(
            "/plans/{plan_id}/procedures/{procedure_id}/users",
            get(handle_get_plan_procedure_users),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Plan Assign Server");

    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database, data is lost on shutdown");
        Persistence::new_in_memory()?
    };

    if args.seed {
        let summary: SeedSummary = persistence.seed_reference_data()?;
        info!(
            procedures = summary.procedures,
            users = summary.users,
            "Reference data loaded"
        );
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind.parse::<IpAddr>()?, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
