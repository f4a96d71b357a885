//! Bid calendar routes

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{optional_id, require_id, ApiJson, ApiQuery, Created, SuccessResponse};
use crate::app::AppState;
use crate::db;
use crate::domain::{BidEvent, CreateBidEventRequest};
use crate::error::{ApiError, DbResultExt};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidEventQuery {
    pub id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BidEventsResponse {
    pub events: Vec<BidEvent>,
}

/// GET /api/bid-events?projectId=
///
/// Events ordered by start time, for one project or all of them.
pub async fn list_bid_events(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<BidEventQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = optional_id(query.project_id.as_deref())?;

    let events = db::bid_events::list_bid_events(&state.db, project_id)
        .await
        .or_fail("Failed to fetch bid events")?;

    Ok(Json(BidEventsResponse { events }))
}

/// POST /api/bid-events
pub async fn create_bid_event(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateBidEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;

    let event = db::bid_events::create_bid_event(&state.db, &req)
        .await
        .or_fail("Failed to create bid event")?;

    tracing::info!(
        event_id = %event.id,
        project_id = %event.project_id,
        starts_at = %event.starts_at,
        "Created bid event"
    );

    Ok(Created(event))
}

/// DELETE /api/bid-events?id=
pub async fn delete_bid_event(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<BidEventQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = require_id(query.id.as_deref(), "Event ID required")?;

    let deleted = db::bid_events::delete_bid_event(&state.db, event_id)
        .await
        .or_fail("Failed to delete bid event")?;
    if !deleted {
        return Err(ApiError::not_found("Bid event not found"));
    }

    tracing::info!(event_id = %event_id, "Deleted bid event");

    Ok(SuccessResponse::ok())
}
