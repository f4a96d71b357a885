//! Loads sample projects into an empty database.

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use quant_hud::config::Settings;
use quant_hud::db::{self, projects::ProjectDefaults};
use quant_hud::domain::{CreateProjectRequest, LaborMinutes, NewItem};
use quant_hud::logging;

fn project(
    name: &str,
    client: &str,
    location: &str,
    rate: Decimal,
    items: Vec<NewItem>,
) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        client: Some(client.to_string()),
        location: Some(location.to_string()),
        status: None,
        shop_rate: Some(rate),
        units: None,
        estimator: None,
        contact_name: None,
        contact_email: None,
        contact_phone: None,
        bid_due_at: None,
        items,
    }
}

fn building_a() -> CreateProjectRequest {
    let items = vec![
        NewItem {
            drawing: Some("S2.4".into()),
            detail: Some("2.5".into()),
            gridline: Some("A-1".into()),
            category: Some("Beam".into()),
            shape: Some("W-Shape".into()),
            size: Some("W12x26".into()),
            length_ft: Some(18.0),
            qty: 2,
            weight_lb: 468.0,
            weld_in: 0.0,
            minutes: LaborMinutes {
                cut_min: 30,
                fit_min: 45,
                weld_min: 60,
                grind_min: 15,
                prep_min: 10,
                paint_min: 5,
                handle_min: 10,
                load_min: 5,
            },
            notes: Some("Two W12x26 eighteen-foot zero".into()),
        },
        NewItem {
            drawing: Some("S2.4".into()),
            detail: Some("2.5".into()),
            category: Some("Base Plate".into()),
            shape: Some("Plate".into()),
            size: Some("12x12x1/2".into()),
            qty: 1,
            weight_lb: 20.4,
            weld_in: 48.0,
            minutes: LaborMinutes {
                cut_min: 15,
                fit_min: 20,
                weld_min: 30,
                grind_min: 10,
                paint_min: 5,
                handle_min: 5,
                ..Default::default()
            },
            notes: Some(
                "Base plate twelve by twelve by half, weld all around quarter fillet".into(),
            ),
            ..Default::default()
        },
        NewItem {
            drawing: Some("S2.4".into()),
            detail: Some("2.5".into()),
            category: Some("Cap Plate".into()),
            shape: Some("Plate".into()),
            size: Some("6x6x1/2".into()),
            qty: 1,
            weight_lb: 5.1,
            weld_in: 24.0,
            minutes: LaborMinutes {
                cut_min: 10,
                fit_min: 15,
                weld_min: 25,
                grind_min: 8,
                paint_min: 4,
                handle_min: 3,
                ..Default::default()
            },
            notes: Some("Cap plate six by six by half, weld all around quarter fillet".into()),
            ..Default::default()
        },
    ];

    project(
        "Structural Steel - Building A",
        "ABC Construction",
        "Downtown",
        Decimal::new(95, 0),
        items,
    )
}

fn rebar() -> CreateProjectRequest {
    let items = vec![NewItem {
        drawing: Some("RB-001".into()),
        detail: Some("Column tie".into()),
        category: Some("Rebar".into()),
        shape: Some("Rectangle".into()),
        size: Some("#4 @12\"".into()),
        qty: 24,
        weight_lb: 96.0,
        minutes: LaborMinutes {
            cut_min: 20,
            fit_min: 35,
            prep_min: 15,
            handle_min: 10,
            load_min: 5,
            ..Default::default()
        },
        ..Default::default()
    }];

    project(
        "Rebar Fabrication",
        "XYZ Contractors",
        "West Side",
        Decimal::new(85, 0),
        items,
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    logging::init_logging(&settings.env);

    let pool = db::create_pool(&settings).await?;
    db::run_migrations(&pool).await?;

    let existing = db::projects::list_projects(&pool)
        .await
        .context("Failed to check for existing projects")?;
    if !existing.is_empty() {
        tracing::warn!(
            projects = existing.len(),
            "Database already has projects, skipping seed"
        );
        return Ok(());
    }

    let defaults = ProjectDefaults {
        shop_rate: settings.default_shop_rate,
        units: settings.default_units.clone(),
    };

    for req in [building_a(), rebar()] {
        let created = db::projects::create_project(&pool, &req, &defaults)
            .await
            .with_context(|| format!("Failed to seed project '{}'", req.name))?;

        tracing::info!(
            project_id = %created.project.id,
            project_name = %created.project.name,
            items = created.items.len(),
            "Seeded project"
        );
    }

    Ok(())
}
