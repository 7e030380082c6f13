use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::EligibilityResult;
use super::EligibilityEngine;
use crate::error::resolution_status;
use crate::resolver::{AddressData, AddressQuery, AddressResolver};

/// Shared handler state: the engine plus whichever resolver configuration selected.
#[derive(Clone)]
pub struct EligibilityState {
    pub engine: Arc<EligibilityEngine>,
    pub resolver: Arc<dyn AddressResolver>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub query: AddressQuery,
}

#[derive(Debug, Serialize)]
pub struct ResolvedEligibility {
    pub address: AddressData,
    pub result: EligibilityResult,
}

/// Router exposing eligibility checks and reference lookups.
pub fn eligibility_router(
    engine: Arc<EligibilityEngine>,
    resolver: Arc<dyn AddressResolver>,
) -> Router {
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler))
        .route("/api/v1/eligibility/resolve", post(resolve_handler))
        .route("/api/v1/utilities/:zip", get(utility_handler))
        .route("/api/v1/counties/:name", get(county_handler))
        .route("/api/v1/reference", get(reference_handler))
        .with_state(EligibilityState { engine, resolver })
}

pub(crate) async fn check_handler(
    State(state): State<EligibilityState>,
    axum::Json(address): axum::Json<AddressData>,
) -> Response {
    let result = state.engine.check(&address);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn resolve_handler(
    State(state): State<EligibilityState>,
    axum::Json(request): axum::Json<ResolveRequest>,
) -> Response {
    match state.resolver.resolve_with_zip(&request.query).await {
        Ok(address) => {
            let result = state.engine.check(&address);
            (
                StatusCode::OK,
                axum::Json(ResolvedEligibility { address, result }),
            )
                .into_response()
        }
        Err(error) => {
            warn!(%error, "address resolution failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (resolution_status(&error), axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn utility_handler(
    State(state): State<EligibilityState>,
    Path(zip): Path<String>,
) -> Response {
    let view = state.engine.utility_for_zip(&zip).view();
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn county_handler(
    State(state): State<EligibilityState>,
    Path(name): Path<String>,
) -> Response {
    let view = state.engine.county_status(Some(&name)).view();
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn reference_handler(State(state): State<EligibilityState>) -> Response {
    let summary = state.engine.reference().summary();
    (StatusCode::OK, axum::Json(summary)).into_response()
}
