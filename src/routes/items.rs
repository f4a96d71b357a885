//! Line item routes

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{optional_id, require_id, ApiJson, ApiQuery, Created, SuccessResponse};
use crate::app::AppState;
use crate::db;
use crate::domain::{CreateItemRequest, Item, UpdateItemRequest};
use crate::error::{ApiError, DbResultExt};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    pub id: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// GET /api/items?projectId=
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ItemQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = optional_id(query.project_id.as_deref())?;

    let items = db::items::list_items(&state.db, project_id)
        .await
        .or_fail("Failed to fetch items")?;

    Ok(Json(ItemsResponse { items }))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.item.validate().map_err(ApiError::BadRequest)?;

    let item = db::items::insert_item(&state.db, req.project_id, &req.item)
        .await
        .or_fail("Failed to create item")?;

    tracing::info!(
        item_id = %item.id,
        project_id = %item.project_id,
        total_min = item.minutes.total(),
        "Created item"
    );

    Ok(Created(item))
}

/// PATCH /api/items
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UpdateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item_id = req.id.ok_or_else(|| ApiError::bad_request("Item ID required"))?;
    req.validate().map_err(ApiError::BadRequest)?;

    let item = db::items::update_item(&state.db, item_id, &req)
        .await
        .or_fail("Failed to update item")?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    tracing::info!(item_id = %item.id, "Updated item");

    Ok(Json(item))
}

/// DELETE /api/items?id=
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ItemQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let item_id = require_id(query.id.as_deref(), "Item ID required")?;

    let deleted = db::items::delete_item(&state.db, item_id)
        .await
        .or_fail("Failed to delete item")?;
    if !deleted {
        return Err(ApiError::not_found("Item not found"));
    }

    tracing::info!(item_id = %item_id, "Deleted item");

    Ok(SuccessResponse::ok())
}
