// Copyright (C) 2026 Lot Desk contributors
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
    routing::{delete, get, post},
};
use clap::Parser;
use lot_desk_api::{
    AddendumSection, ApiError, CreateVehicleRequest, CreateVehicleResponse, DeleteVehicleResponse,
    FieldViolation, ListVehiclesResponse, UpdateAttributesRequest, UpdateStatusRequest,
    UpdateVehicleResponse, VehicleInfo, create_vehicle, delete_vehicle, get_vehicle,
    list_vehicles, update_vehicle_addendum, update_vehicle_attributes, update_vehicle_status,
};
use lot_desk_audit::{Actor, SystemClock};
use lot_desk_persistence::{JsonStore, MemoryGateway, VehicleGateway};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Lot Desk Server - HTTP server for the dealership operations portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON vehicle store. If not provided, uses an in-memory store.
    #[arg(short, long)]
    store: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The gateway is wrapped in a Mutex so concurrent requests serialize
/// their store access; conflicting edits resolve last-write-wins at the
/// store, matching the portal's historical behavior.
#[derive(Clone)]
struct AppState {
    /// The vehicle store gateway.
    gateway: Arc<Mutex<Box<dyn VehicleGateway>>>,
}

/// Actor identity fields carried on every mutating request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorFields {
    /// The actor ID performing this action.
    actor_id: String,
    /// The actor display name recorded in audit fields.
    actor_display_name: String,
}

impl ActorFields {
    fn into_actor(self) -> Actor {
        Actor::new(self.actor_id, self.actor_display_name)
    }
}

/// API request for adding a vehicle.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateVehicleApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The vehicle to add.
    vehicle: CreateVehicleRequest,
}

/// API request for editing descriptive attributes.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateAttributesApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The attribute changes to apply.
    changes: UpdateAttributesRequest,
}

/// API request for changing sale status.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    #[serde(flatten)]
    status: UpdateStatusRequest,
}

/// API request for rebuilding the addendum.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateAddendumApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The addendum section from the form.
    addendum: AddendumSection,
}

/// API request for deleting a vehicle.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct DeleteVehicleApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Per-field violations, present for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Vec<FieldViolation>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Per-field violations, when available.
    violations: Option<Vec<FieldViolation>>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            violations: self.violations,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ValidationFailed { ref violations } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
                violations: Some(violations.clone()),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
                violations: None,
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    violations: None,
                }
            }
        }
    }
}

/// Handler for POST `/vehicles`.
///
/// Adds a vehicle to inventory.
async fn handle_create_vehicle(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateVehicleApiRequest>,
) -> Result<Json<CreateVehicleResponse>, HttpError> {
    info!(
        actor_id = %req.actor.actor_id,
        vin = %req.vehicle.vin,
        "Handling create_vehicle request"
    );

    let actor: Actor = req.actor.into_actor();
    let mut gateway = app_state.gateway.lock().await;
    let response: CreateVehicleResponse =
        create_vehicle(gateway.as_mut(), req.vehicle, &actor, &SystemClock)?;
    drop(gateway);

    info!(
        vehicle_id = response.vehicle_id,
        "Successfully created vehicle"
    );

    Ok(Json(response))
}

/// Handler for GET `/vehicles`.
///
/// Lists the whole inventory, ordered by date added.
async fn handle_list_vehicles(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListVehiclesResponse>, HttpError> {
    info!("Handling list_vehicles request");

    let gateway = app_state.gateway.lock().await;
    let response: ListVehiclesResponse = list_vehicles(gateway.as_ref())?;
    drop(gateway);

    Ok(Json(response))
}

/// Handler for GET `/vehicles/{vehicle_id}`.
async fn handle_get_vehicle(
    AxumState(app_state): AxumState<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Json<VehicleInfo>, HttpError> {
    info!(vehicle_id, "Handling get_vehicle request");

    let gateway = app_state.gateway.lock().await;
    let response: VehicleInfo = get_vehicle(gateway.as_ref(), vehicle_id)?;
    drop(gateway);

    Ok(Json(response))
}

/// Handler for POST `/vehicles/{vehicle_id}/attributes`.
async fn handle_update_attributes(
    AxumState(app_state): AxumState<AppState>,
    Path(vehicle_id): Path<i64>,
    Json(req): Json<UpdateAttributesApiRequest>,
) -> Result<Json<UpdateVehicleResponse>, HttpError> {
    info!(
        vehicle_id,
        actor_id = %req.actor.actor_id,
        "Handling update_attributes request"
    );

    let actor: Actor = req.actor.into_actor();
    let mut gateway = app_state.gateway.lock().await;
    let response: UpdateVehicleResponse = update_vehicle_attributes(
        gateway.as_mut(),
        vehicle_id,
        req.changes,
        &actor,
        &SystemClock,
    )?;
    drop(gateway);

    Ok(Json(response))
}

/// Handler for POST `/vehicles/{vehicle_id}/status`.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(vehicle_id): Path<i64>,
    Json(req): Json<UpdateStatusApiRequest>,
) -> Result<Json<UpdateVehicleResponse>, HttpError> {
    info!(
        vehicle_id,
        actor_id = %req.actor.actor_id,
        status = %req.status.status,
        "Handling update_status request"
    );

    let actor: Actor = req.actor.into_actor();
    let mut gateway = app_state.gateway.lock().await;
    let response: UpdateVehicleResponse = update_vehicle_status(
        gateway.as_mut(),
        vehicle_id,
        req.status,
        &actor,
        &SystemClock,
    )?;
    drop(gateway);

    info!(vehicle_id, "Successfully changed vehicle status");

    Ok(Json(response))
}

/// Handler for POST `/vehicles/{vehicle_id}/addendum`.
async fn handle_update_addendum(
    AxumState(app_state): AxumState<AppState>,
    Path(vehicle_id): Path<i64>,
    Json(req): Json<UpdateAddendumApiRequest>,
) -> Result<Json<UpdateVehicleResponse>, HttpError> {
    info!(
        vehicle_id,
        actor_id = %req.actor.actor_id,
        "Handling update_addendum request"
    );

    let actor: Actor = req.actor.into_actor();
    let mut gateway = app_state.gateway.lock().await;
    let response: UpdateVehicleResponse = update_vehicle_addendum(
        gateway.as_mut(),
        vehicle_id,
        req.addendum,
        &actor,
        &SystemClock,
    )?;
    drop(gateway);

    Ok(Json(response))
}

/// Handler for DELETE `/vehicles/{vehicle_id}`.
///
/// Forwards the delete verbatim to the store.
async fn handle_delete_vehicle(
    AxumState(app_state): AxumState<AppState>,
    Path(vehicle_id): Path<i64>,
    Json(req): Json<DeleteVehicleApiRequest>,
) -> Result<Json<DeleteVehicleResponse>, HttpError> {
    info!(
        vehicle_id,
        actor_id = %req.actor.actor_id,
        "Handling delete_vehicle request"
    );

    let actor: Actor = req.actor.into_actor();
    let mut gateway = app_state.gateway.lock().await;
    let response: DeleteVehicleResponse = delete_vehicle(gateway.as_mut(), vehicle_id, &actor)?;
    drop(gateway);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/vehicles", post(handle_create_vehicle))
        .route("/vehicles", get(handle_list_vehicles))
        .route("/vehicles/{vehicle_id}", get(handle_get_vehicle))
        .route("/vehicles/{vehicle_id}", delete(handle_delete_vehicle))
        .route(
            "/vehicles/{vehicle_id}/attributes",
            post(handle_update_attributes),
        )
        .route("/vehicles/{vehicle_id}/status", post(handle_update_status))
        .route(
            "/vehicles/{vehicle_id}/addendum",
            post(handle_update_addendum),
        )
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

    info!("Initializing Lot Desk Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let gateway: Box<dyn VehicleGateway> = if let Some(store_path) = &args.store {
        info!("Using JSON vehicle store at: {}", store_path);
        Box::new(JsonStore::open(store_path)?)
    } else {
        info!("Using in-memory vehicle store");
        Box::new(MemoryGateway::new())
    };

    let app_state: AppState = AppState {
        gateway: Arc::new(Mutex::new(gateway)),
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
