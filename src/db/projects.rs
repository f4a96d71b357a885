use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use super::items;
use crate::domain::{
    CreateProjectRequest, Item, Project, ProjectStatus, ProjectWithItems, UpdateProjectRequest,
};

const PROJECT_COLUMNS: &str = "id, name, client, location, status, shop_rate, units, estimator, \
     contact_name, contact_email, contact_phone, bid_due_at, created_at, updated_at";

/// Database row for project
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    name: String,
    client: Option<String>,
    location: Option<String>,
    status: String,
    shop_rate: Decimal,
    units: String,
    estimator: Option<String>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    bid_due_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            client: row.client,
            location: row.location,
            status: ProjectStatus::from_db(&row.status),
            shop_rate: row.shop_rate,
            units: row.units,
            estimator: row.estimator,
            contact_name: row.contact_name,
            contact_email: row.contact_email,
            contact_phone: row.contact_phone,
            bid_due_at: row.bid_due_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Values filled in when a create request leaves them out
#[derive(Debug, Clone)]
pub struct ProjectDefaults {
    pub shop_rate: Decimal,
    pub units: String,
}

/// All projects, most recently updated first
pub async fn list_projects(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY updated_at DESC, id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// All projects with their items attached
pub async fn list_projects_with_items(
    pool: &PgPool,
) -> Result<Vec<ProjectWithItems>, sqlx::Error> {
    let projects = list_projects(pool).await?;
    let ids: Vec<Uuid> = projects.iter().map(|p| p.id).collect();

    let mut by_project: HashMap<Uuid, Vec<Item>> = HashMap::new();
    for item in items::list_items_for_projects(pool, &ids).await? {
        by_project.entry(item.project_id).or_default().push(item);
    }

    Ok(projects
        .into_iter()
        .map(|project| ProjectWithItems {
            items: by_project.remove(&project.id).unwrap_or_default(),
            project,
        })
        .collect())
}

pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Insert a project and any nested items in one transaction
pub async fn create_project(
    pool: &PgPool,
    req: &CreateProjectRequest,
    defaults: &ProjectDefaults,
) -> Result<ProjectWithItems, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        r#"
        INSERT INTO projects (name, client, location, status, shop_rate, units, estimator,
                              contact_name, contact_email, contact_phone, bid_due_at,
                              created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
        RETURNING {PROJECT_COLUMNS}
        "#
    ))
    .bind(req.name.trim())
    .bind(&req.client)
    .bind(&req.location)
    .bind(req.status.unwrap_or_default().as_str())
    .bind(req.shop_rate.unwrap_or(defaults.shop_rate))
    .bind(req.units.as_deref().unwrap_or(&defaults.units))
    .bind(&req.estimator)
    .bind(&req.contact_name)
    .bind(&req.contact_email)
    .bind(&req.contact_phone)
    .bind(req.bid_due_at)
    .fetch_one(&mut *tx)
    .await?;

    let project: Project = row.into();

    let mut created = Vec::with_capacity(req.items.len());
    for item in &req.items {
        created.push(items::insert_item(&mut *tx, project.id, item).await?);
    }

    tx.commit().await?;

    Ok(ProjectWithItems {
        project,
        items: created,
    })
}

/// Apply the fields present in `req`; `None` when the project does not exist
pub async fn update_project(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateProjectRequest,
) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        r#"
        UPDATE projects SET
            name = COALESCE($2, name),
            client = COALESCE($3, client),
            location = COALESCE($4, location),
            status = COALESCE($5, status),
            shop_rate = COALESCE($6, shop_rate),
            units = COALESCE($7, units),
            estimator = COALESCE($8, estimator),
            contact_name = COALESCE($9, contact_name),
            contact_email = COALESCE($10, contact_email),
            contact_phone = COALESCE($11, contact_phone),
            bid_due_at = COALESCE($12, bid_due_at),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {PROJECT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(req.name.as_deref().map(str::trim))
    .bind(&req.client)
    .bind(&req.location)
    .bind(req.status.map(|s| s.as_str()))
    .bind(req.shop_rate)
    .bind(&req.units)
    .bind(&req.estimator)
    .bind(&req.contact_name)
    .bind(&req.contact_email)
    .bind(&req.contact_phone)
    .bind(req.bid_due_at)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Returns false when no project had that id. Items and bid events go with it.
pub async fn delete_project(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
