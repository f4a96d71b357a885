use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::app::AppState;
use crate::db;
use crate::error::{ApiError, DbResultExt};
use crate::estimate::{calculate_totals, ProjectRollup};

/// GET /api/estimate/summary
///
/// Dashboard headline totals across every project.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = db::projects::list_projects_with_items(&state.db)
        .await
        .or_fail("Failed to fetch projects")?;

    let rollups: Vec<ProjectRollup> = projects
        .iter()
        .map(|p| ProjectRollup::from_items(p.project.shop_rate, &p.items))
        .collect();

    Ok(Json(calculate_totals(&rollups)))
}
