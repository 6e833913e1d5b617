//! Web API module for Resistor Bands.
//!
//! This module exposes the color-band catalog over a small REST API.
//! Handlers are thin: they parse the request, call into
//! [`ColorBandCatalog`], and render the result as JSON.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /colors` - List all band colors
//! - `GET /colors/{color}` - Details for a single color band
//! - `POST /resistors/value-from-bands` - Decode bands from a JSON body
//! - `GET /resistors/value-from-bands` - Decode bands from query parameters

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::catalog::{BandColors, CalculatedResistor, ColorBand, ColorBandCatalog};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Color catalog (immutable after load)
    catalog: Arc<ColorBandCatalog>,
}

impl AppState {
    /// Creates a new application state with the embedded color catalog.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_catalog(ColorBandCatalog::load()?))
    }

    /// Creates application state around an already loaded catalog.
    #[must_use]
    pub fn with_catalog(catalog: ColorBandCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the shared color catalog.
    #[must_use]
    pub fn catalog(&self) -> &ColorBandCatalog {
        &self.catalog
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Band colors of a resistor, as JSON body or query parameters.
///
/// All fields are optional at the serde level so that missing fields
/// produce a 400 naming the field instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistorBandsRequest {
    /// Color of the 1st band.
    pub first_band: Option<String>,
    /// Color of the 2nd band.
    pub second_band: Option<String>,
    /// Color of the 3rd band. Left out for 4-band-coded resistors.
    pub third_band: Option<String>,
    /// Color of the multiplier band.
    pub multiplier: Option<String>,
    /// Color of the tolerance band.
    pub tolerance: Option<String>,
}

impl ResistorBandsRequest {
    /// Checks required fields and selects the four- or five-band encoding.
    ///
    /// Blank values count as missing; a blank third band selects four-band.
    fn into_band_colors(self) -> Result<BandColors, ApiError> {
        let first = required(self.first_band, "firstBand")?;
        let second = required(self.second_band, "secondBand")?;
        let multiplier = required(self.multiplier, "multiplier")?;
        let tolerance = required(self.tolerance, "tolerance")?;
        let third = non_blank(self.third_band);

        Ok(BandColors::from_parts(
            first, second, third, multiplier, tolerance,
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    non_blank(value)
        .ok_or_else(|| ApiError::with_details("Missing required field", field.to_string()))
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /colors - Return all colors for bands on resistors.
async fn list_colors(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog().list_colors().to_vec())
}

/// GET /colors/{color} - Return details for a color band.
async fn get_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> ApiResult<ColorBand> {
    state.catalog().lookup(&color).map(Json).map_err(|e| {
        debug!("Color lookup failed: {}", e);
        (StatusCode::NOT_FOUND, Json(ApiError::new(e.to_string())))
    })
}

/// POST /resistors/value-from-bands - Decode bands given as JSON body.
///
/// Malformed bodies (wrong content type, invalid JSON, non-string fields)
/// are answered with the same JSON error shape as decode failures.
async fn value_from_bands_body(
    State(state): State<AppState>,
    request: Result<Json<ResistorBandsRequest>, JsonRejection>,
) -> ApiResult<CalculatedResistor> {
    let Json(request) = request.map_err(|e| {
        debug!("Rejected request body: {}", e.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid request body", e.body_text())),
        )
    })?;
    decode_request(&state, request)
}

/// GET /resistors/value-from-bands - Decode bands given as query parameters.
async fn value_from_bands_query(
    State(state): State<AppState>,
    request: Result<Query<ResistorBandsRequest>, QueryRejection>,
) -> ApiResult<CalculatedResistor> {
    let Query(request) = request.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details("Invalid query string", e.body_text())),
        )
    })?;
    decode_request(&state, request)
}

/// Shared decode path for both request shapes.
fn decode_request(state: &AppState, request: ResistorBandsRequest) -> ApiResult<CalculatedResistor> {
    let colors = request
        .into_band_colors()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(e)))?;

    debug!(
        "Decoding {}-band resistor: {:?}",
        colors.band_count(),
        colors.as_slice()
    );

    state.catalog().decode(&colors).map(Json).map_err(|e| {
        debug!("Decode rejected: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "The request contains invalid data",
                e.to_string(),
            )),
        )
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the API is read-only and carries no credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Color endpoints
        .route("/colors", get(list_colors))
        .route("/colors/{color}", get(get_color))
        // Resistor endpoints
        .route(
            "/resistors/value-from-bands",
            get(value_from_bands_query).post(value_from_bands_body),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the catalog fails to load or the server fails to start.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new()?;
    info!(
        "Loaded color catalog with {} colors",
        state.catalog().list_colors().len()
    );

    let app = create_router(state);

    info!("Starting Resistor Bands web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
