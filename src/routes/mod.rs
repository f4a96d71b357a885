pub mod bid_events;
pub mod estimates;
pub mod health;
pub mod items;
pub mod projects;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Projects
        .route(
            "/api/projects",
            get(projects::list_projects)
                .post(projects::create_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/api/projects/:project_id/estimate",
            get(projects::get_project_estimate),
        )
        // Line items
        .route(
            "/api/items",
            get(items::list_items)
                .post(items::create_item)
                .patch(items::update_item)
                .delete(items::delete_item),
        )
        // Bid calendar
        .route(
            "/api/bid-events",
            get(bid_events::list_bid_events)
                .post(bid_events::create_bid_event)
                .delete(bid_events::delete_bid_event),
        )
        // Dashboard
        .route("/api/estimate/summary", get(estimates::get_summary))
}
