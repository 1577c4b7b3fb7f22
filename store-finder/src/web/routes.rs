//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::geocode::Geocoder;
use crate::search::SearchError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: Geocoder + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index_page::<G>))
        .route("/health", get(health))
        .route("/stores/search", get(search_stores::<G>))
        .route("/api/stores/search", post(search_stores_json::<G>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Store finder page listing the whole catalog.
async fn index_page<G>(State(state): State<AppState<G>>) -> Result<Html<String>, AppError>
where
    G: Send + Sync + 'static,
{
    let template = IndexTemplate {
        stores: state
            .catalog
            .stores()
            .iter()
            .map(StoreView::from_store)
            .collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse the `radius` query parameter as kilometres.
fn parse_radius(radius: Option<&str>) -> Result<f64, AppError> {
    let raw = radius.ok_or_else(|| AppError::BadRequest {
        message: "Missing radius".to_string(),
    })?;

    raw.trim().parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid radius: {}", raw),
    })
}

/// Read the `radius` field of a JSON body as kilometres.
fn json_radius(radius: &serde_json::Value) -> Result<f64, AppError> {
    if radius.is_null() {
        return Err(AppError::BadRequest {
            message: "Missing radius".to_string(),
        });
    }

    radius.as_f64().ok_or_else(|| AppError::BadRequest {
        message: format!("Invalid radius: {}", radius),
    })
}

fn render_store_list(template: StoreListTemplate) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Search the catalog around a postcode.
///
/// A missing postcode is searched as an empty one, which never resolves, so
/// it surfaces as an invalid postcode like any other bad input. HTML clients
/// get input errors inside the results fragment; JSON clients get a 400.
async fn search_stores<G>(
    State(state): State<AppState<G>>,
    headers: HeaderMap,
    Query(req): Query<SearchStoresQuery>,
) -> Result<Response, AppError>
where
    G: Geocoder + Send + Sync + 'static,
{
    let html = accepts_html(&headers);
    let postcode = req.postcode.unwrap_or_default();
    let parsed = parse_radius(req.radius.as_deref());
    let radius = req.radius.unwrap_or_default();

    let radius_km = match parsed {
        Ok(radius_km) => radius_km,
        Err(AppError::BadRequest { message }) if html => {
            return render_store_list(StoreListTemplate {
                postcode,
                radius,
                stores: Vec::new(),
                invalid_postcode: false,
                radius_error: Some(message),
            });
        }
        Err(e) => return Err(e),
    };

    let result = state
        .catalog
        .find(state.geocoder.as_ref(), &postcode, radius_km)
        .await;

    // Return HTML or JSON based on Accept header
    if html {
        let (stores, invalid_postcode) = match result {
            Ok(stores) => (stores.iter().map(StoreView::from_store).collect(), false),
            Err(SearchError::InvalidPostcode { .. }) => (Vec::new(), true),
        };

        render_store_list(StoreListTemplate {
            postcode,
            radius,
            stores,
            invalid_postcode,
            radius_error: None,
        })
    } else {
        let stores = result?;
        Ok(Json(SearchStoresResponse { stores }).into_response())
    }
}

/// JSON search endpoint.
///
/// The postcode must be a JSON string and the radius a JSON number. Any
/// other value, or a body that is not JSON at all, is a 400 with an error
/// body; a non-string postcode is rejected without a geocoder lookup.
async fn search_stores_json<G>(
    State(state): State<AppState<G>>,
    payload: Result<Json<SearchStoresRequest>, JsonRejection>,
) -> Result<Json<SearchStoresResponse>, AppError>
where
    G: Geocoder + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;
    let radius_km = json_radius(&req.radius)?;

    let Some(postcode) = req.postcode.as_str() else {
        return Err(SearchError::InvalidPostcode {
            postcode: req.postcode.to_string(),
        }
        .into());
    };

    let stores = state
        .catalog
        .find(state.geocoder.as_ref(), postcode, radius_km)
        .await?;

    Ok(Json(SearchStoresResponse { stores }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidPostcode { .. } => AppError::BadRequest {
                message: "Invalid postcode".to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(status = %status, "request failed: {message}");
        } else {
            warn!(status = %status, "request rejected: {message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
