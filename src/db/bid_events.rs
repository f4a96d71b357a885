use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{BidEvent, CreateBidEventRequest};

const EVENT_COLUMNS: &str =
    "id, project_id, title, notes, starts_at, ends_at, all_day, created_at, updated_at";

/// Database row for bid event
#[derive(Debug, sqlx::FromRow)]
struct BidEventRow {
    id: Uuid,
    project_id: Uuid,
    title: String,
    notes: Option<String>,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    all_day: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BidEventRow> for BidEvent {
    fn from(row: BidEventRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            notes: row.notes,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            all_day: row.all_day,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Events in start order, optionally limited to one project
pub async fn list_bid_events(
    pool: &PgPool,
    project_id: Option<Uuid>,
) -> Result<Vec<BidEvent>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BidEventRow>(&format!(
        r#"
        SELECT {EVENT_COLUMNS} FROM bid_events
        WHERE ($1::uuid IS NULL OR project_id = $1)
        ORDER BY starts_at ASC, id
        "#
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn create_bid_event(
    pool: &PgPool,
    req: &CreateBidEventRequest,
) -> Result<BidEvent, sqlx::Error> {
    let row = sqlx::query_as::<_, BidEventRow>(&format!(
        r#"
        INSERT INTO bid_events (project_id, title, notes, starts_at, ends_at, all_day,
                                created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING {EVENT_COLUMNS}
        "#
    ))
    .bind(req.project_id)
    .bind(req.title.trim())
    .bind(&req.notes)
    .bind(req.starts_at)
    .bind(req.ends_at)
    .bind(req.all_day)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Returns false when no event had that id
pub async fn delete_bid_event(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bid_events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
