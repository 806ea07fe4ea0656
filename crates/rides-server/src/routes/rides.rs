use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use rides_core::envelope::{Envelope, Pagination};
use rides_core::model::Ride;
use rides_core::params::{self, PAGE_SIZE};
use rides_core::validate::validate_new_ride;

use super::{ApiError, ApiResult};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rides", get(list).post(create))
        .route("/rides/", get(list))
        .route("/rides/{id}", get(get_one))
}

/// Validate, insert, then read the row back so the client sees the
/// store-assigned `rideID` and `created`.
async fn create(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Vec<Ride>>>)> {
    let Json(payload) = body?;
    let ride = validate_new_ride(&payload)?;
    let id = state.db.insert_ride(&ride).await?;
    let rows = state.db.find_rides_by_id(id).await?;
    tracing::info!(ride_id = id, "ride created");
    Ok((StatusCode::CREATED, Json(Envelope::success(rows))))
}

async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Envelope<Vec<Ride>>>> {
    let Query(pairs) = query?;
    let page = params::page_from_query(&pairs);
    let result = state.db.list_rides(page, PAGE_SIZE).await?;
    Ok(Json(Envelope::paginated(
        result.rows,
        Pagination::new(page, result.total_count),
    )))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Vec<Ride>>>> {
    let rides = match params::ride_id(&id) {
        Some(id) => state.db.find_rides_by_id(id).await?,
        None => Vec::new(),
    };
    if rides.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Envelope::success(rides)))
}
