use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::domain::{Item, LaborMinutes, NewItem, UpdateItemRequest};

const ITEM_COLUMNS: &str = "id, project_id, drawing, detail, gridline, category, shape, size, \
     length_ft, qty, weight_lb, weld_in, cut_min, fit_min, weld_min, grind_min, prep_min, \
     paint_min, handle_min, load_min, notes, created_at, updated_at";

/// Database row for item
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    project_id: Uuid,
    drawing: Option<String>,
    detail: Option<String>,
    gridline: Option<String>,
    category: Option<String>,
    shape: Option<String>,
    size: Option<String>,
    length_ft: Option<f64>,
    qty: i32,
    weight_lb: f64,
    weld_in: f64,
    cut_min: i32,
    fit_min: i32,
    weld_min: i32,
    grind_min: i32,
    prep_min: i32,
    paint_min: i32,
    handle_min: i32,
    load_min: i32,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            project_id: row.project_id,
            drawing: row.drawing,
            detail: row.detail,
            gridline: row.gridline,
            category: row.category,
            shape: row.shape,
            size: row.size,
            length_ft: row.length_ft,
            qty: row.qty,
            weight_lb: row.weight_lb,
            weld_in: row.weld_in,
            minutes: LaborMinutes {
                cut_min: row.cut_min,
                fit_min: row.fit_min,
                weld_min: row.weld_min,
                grind_min: row.grind_min,
                prep_min: row.prep_min,
                paint_min: row.paint_min,
                handle_min: row.handle_min,
                load_min: row.load_min,
            },
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Items in entry order, optionally limited to one project
pub async fn list_items(
    pool: &PgPool,
    project_id: Option<Uuid>,
) -> Result<Vec<Item>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ItemRow>(&format!(
        r#"
        SELECT {ITEM_COLUMNS} FROM items
        WHERE ($1::uuid IS NULL OR project_id = $1)
        ORDER BY created_at, id
        "#
    ))
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn list_items_for_projects(
    pool: &PgPool,
    project_ids: &[Uuid],
) -> Result<Vec<Item>, sqlx::Error> {
    if project_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, ItemRow>(&format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE project_id = ANY($1) ORDER BY created_at, id"
    ))
    .bind(project_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Insert one item; accepts a pool or an open transaction
pub async fn insert_item<'e, E>(
    executor: E,
    project_id: Uuid,
    item: &NewItem,
) -> Result<Item, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, ItemRow>(&format!(
        r#"
        INSERT INTO items (project_id, drawing, detail, gridline, category, shape, size,
                           length_ft, qty, weight_lb, weld_in, cut_min, fit_min, weld_min,
                           grind_min, prep_min, paint_min, handle_min, load_min, notes,
                           created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20, clock_timestamp(), clock_timestamp())
        RETURNING {ITEM_COLUMNS}
        "#
    ))
    .bind(project_id)
    .bind(&item.drawing)
    .bind(&item.detail)
    .bind(&item.gridline)
    .bind(&item.category)
    .bind(&item.shape)
    .bind(&item.size)
    .bind(item.length_ft)
    .bind(item.qty)
    .bind(item.weight_lb)
    .bind(item.weld_in)
    .bind(item.minutes.cut_min)
    .bind(item.minutes.fit_min)
    .bind(item.minutes.weld_min)
    .bind(item.minutes.grind_min)
    .bind(item.minutes.prep_min)
    .bind(item.minutes.paint_min)
    .bind(item.minutes.handle_min)
    .bind(item.minutes.load_min)
    .bind(&item.notes)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

/// Apply the fields present in `req`; `None` when the item does not exist
pub async fn update_item(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateItemRequest,
) -> Result<Option<Item>, sqlx::Error> {
    let row = sqlx::query_as::<_, ItemRow>(&format!(
        r#"
        UPDATE items SET
            drawing = COALESCE($2, drawing),
            detail = COALESCE($3, detail),
            gridline = COALESCE($4, gridline),
            category = COALESCE($5, category),
            shape = COALESCE($6, shape),
            size = COALESCE($7, size),
            length_ft = COALESCE($8, length_ft),
            qty = COALESCE($9, qty),
            weight_lb = COALESCE($10, weight_lb),
            weld_in = COALESCE($11, weld_in),
            cut_min = COALESCE($12, cut_min),
            fit_min = COALESCE($13, fit_min),
            weld_min = COALESCE($14, weld_min),
            grind_min = COALESCE($15, grind_min),
            prep_min = COALESCE($16, prep_min),
            paint_min = COALESCE($17, paint_min),
            handle_min = COALESCE($18, handle_min),
            load_min = COALESCE($19, load_min),
            notes = COALESCE($20, notes),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {ITEM_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&req.drawing)
    .bind(&req.detail)
    .bind(&req.gridline)
    .bind(&req.category)
    .bind(&req.shape)
    .bind(&req.size)
    .bind(req.length_ft)
    .bind(req.qty)
    .bind(req.weight_lb)
    .bind(req.weld_in)
    .bind(req.cut_min)
    .bind(req.fit_min)
    .bind(req.weld_min)
    .bind(req.grind_min)
    .bind(req.prep_min)
    .bind(req.paint_min)
    .bind(req.handle_min)
    .bind(req.load_min)
    .bind(&req.notes)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Returns false when no item had that id
pub async fn delete_item(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
