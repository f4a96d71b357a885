//! Project routes
//!
//! `/api/projects` list, create and update, plus the per-project estimate.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{require_id, ApiJson, ApiPath, ApiQuery, Created, SuccessResponse};
use crate::app::AppState;
use crate::db::{self, projects::ProjectDefaults};
use crate::domain::{CreateProjectRequest, ProjectWithItems, UpdateProjectRequest};
use crate::error::{ApiError, DbResultExt};
use crate::estimate::ProjectEstimate;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectWithItems>,
}

/// GET /api/projects
///
/// All projects, most recently updated first, each with its items.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = db::projects::list_projects_with_items(&state.db)
        .await
        .or_fail("Failed to fetch projects")?;

    tracing::debug!(count = projects.len(), "Listed projects");

    Ok(Json(ProjectsResponse { projects }))
}

/// POST /api/projects
///
/// Create a project, optionally with its initial line items.
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;

    let defaults = ProjectDefaults {
        shop_rate: state.settings.default_shop_rate,
        units: state.settings.default_units.clone(),
    };

    let created = db::projects::create_project(&state.db, &req, &defaults)
        .await
        .or_fail("Failed to create project")?;

    tracing::info!(
        project_id = %created.project.id,
        project_name = %created.project.name,
        items = created.items.len(),
        "Created project"
    );

    Ok(Created(created))
}

/// PATCH /api/projects
///
/// Update the project named by `id` in the body. Fields left out are unchanged.
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = req
        .id
        .ok_or_else(|| ApiError::bad_request("Project ID required"))?;
    req.validate().map_err(ApiError::BadRequest)?;

    let project = db::projects::update_project(&state.db, project_id, &req)
        .await
        .or_fail("Failed to update project")?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    tracing::info!(project_id = %project.id, "Updated project");

    Ok(Json(project))
}

/// DELETE /api/projects?id=
///
/// Removes the project along with its items and bid events.
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ProjectQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let project_id = require_id(query.id.as_deref(), "Project ID required")?;

    let deleted = db::projects::delete_project(&state.db, project_id)
        .await
        .or_fail("Failed to delete project")?;
    if !deleted {
        return Err(ApiError::not_found("Project not found"));
    }

    tracing::info!(project_id = %project_id, "Deleted project");

    Ok(SuccessResponse::ok())
}

/// GET /api/projects/:project_id/estimate
///
/// Man-hour and labor-cost rollup for one project.
pub async fn get_project_estimate(
    State(state): State<Arc<AppState>>,
    ApiPath(project_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let project = db::projects::get_project(&state.db, project_id)
        .await
        .or_fail("Failed to fetch project")?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    let items = db::items::list_items(&state.db, Some(project_id))
        .await
        .or_fail("Failed to fetch items")?;

    Ok(Json(ProjectEstimate::compute(&project, &items)))
}
