//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, trace};

use crate::domain::{Itinerary, LineId, StationId};
use crate::planner::{self, PathError};
use crate::render;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/route", get(plan_route))
        .route("/api/route", get(plan_route_json))
        .route("/api/route/text", get(plan_route_text))
        .route("/api/stations", get(list_stations))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the search form and station datalist.
async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    let stations = state
        .network
        .stations()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    IndexTemplate { stations }
}

/// List all known stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    Json(StationsResponse { stations })
}

/// Check if the request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn validate(req: &RouteRequest) -> Result<(), AppError> {
    if req.from.is_empty() || req.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both 'from' and 'to' stations are required".to_string(),
        });
    }
    Ok(())
}

/// Run one route query against the shared network.
///
/// Relaxation diagnostics go to `tracing` at trace level; the planner
/// itself does no logging.
fn plan(state: &AppState, req: &RouteRequest) -> Result<Itinerary, PathError> {
    let from = StationId::from(req.from.as_str());
    let to = StationId::from(req.to.as_str());
    planner::find_route_observed(
        &state.network,
        &from,
        &to,
        |station: &StationId, cost: u32, line: &LineId| {
            trace!(station = %station, cost, line = %line, "relaxed best-known cost");
        },
    )
}

/// Plan a route, returning HTML or JSON based on the Accept header.
///
/// "No route exists" is a normal outcome: the HTML branch renders a
/// results page saying so, the JSON branch returns 404 with a message.
/// A broken predecessor chain is an internal defect and maps to 500.
async fn plan_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    validate(&req)?;
    let outcome = plan(&state, &req);

    if accepts_html(&headers) {
        let template = match outcome {
            Ok(itinerary) => ItineraryTemplate::from_itinerary(&req.from, &req.to, &itinerary),
            Err(PathError::Unreachable { .. }) => ItineraryTemplate::no_route(&req.from, &req.to),
            Err(e @ PathError::BrokenChain { .. }) => {
                error!(error = %e, "route reconstruction failed");
                let page = ErrorTemplate {
                    title: "Internal error".to_string(),
                    message: e.to_string(),
                };
                let html = page.render().unwrap_or_else(|e| format!("Template error: {e}"));
                return Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response());
            }
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;
        Ok(Html(html).into_response())
    } else {
        let itinerary = outcome.map_err(AppError::from)?;
        Ok(Json(RouteResponse::from_itinerary(&req.from, &req.to, &itinerary)).into_response())
    }
}

/// Plan a route, always returning JSON.
async fn plan_route_json(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    validate(&req)?;
    let itinerary = plan(&state, &req)?;
    Ok(Json(RouteResponse::from_itinerary(&req.from, &req.to, &itinerary)))
}

/// Plan a route, returning the console-style plain-text listing.
async fn plan_route_text(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    validate(&req)?;
    match plan(&state, &req) {
        Ok(itinerary) => Ok(render::render_text(&itinerary).into_response()),
        Err(PathError::Unreachable { .. }) => Ok("No path found.\n".into_response()),
        Err(e @ PathError::BrokenChain { .. }) => Err(AppError::Internal {
            message: e.to_string(),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match e {
            // A missing route is a normal query outcome, not a server fault.
            PathError::Unreachable { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            PathError::BrokenChain { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_and_broken_chain_stay_distinguishable() {
        let unreachable = AppError::from(PathError::Unreachable {
            from: StationId::from("A"),
            to: StationId::from("B"),
        });
        assert!(matches!(unreachable, AppError::NotFound { .. }));

        let broken = AppError::from(PathError::BrokenChain {
            at: StationId::from("B"),
        });
        assert!(matches!(broken, AppError::Internal { .. }));
    }

    #[test]
    fn validate_rejects_missing_stations() {
        let req = RouteRequest {
            from: String::new(),
            to: "B".to_string(),
        };
        assert!(matches!(
            validate(&req),
            Err(AppError::BadRequest { .. })
        ));
    }
}
