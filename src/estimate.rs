//! Estimate engine
//!
//! Turns line-item labor minutes into man-hours and labor dollars, and rolls
//! items up into project and dashboard totals. Everything here is pure; the
//! route handlers load rows and hand them in.
//!
//! Weight, weld inches and minutes on an item are line totals. `qty` is
//! carried for display only and is never multiplied in.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Item, LaborMinutes, Project};

pub const MINUTES_PER_HOUR: i64 = 60;

/// Short ton
pub const POUNDS_PER_TON: f64 = 2000.0;

impl LaborMinutes {
    /// Sum of every operation's minutes
    pub fn total(&self) -> i64 {
        [
            self.cut_min,
            self.fit_min,
            self.weld_min,
            self.grind_min,
            self.prep_min,
            self.paint_min,
            self.handle_min,
            self.load_min,
        ]
        .iter()
        .map(|&m| i64::from(m))
        .sum()
    }
}

/// Minutes to man-hours, unrounded.
pub fn man_hours(total_min: i64) -> Decimal {
    Decimal::from(total_min) / Decimal::from(MINUTES_PER_HOUR)
}

/// Minutes at an hourly shop rate, rounded to the cent. Divides by 60 last,
/// so a cost that lands on a half cent is exact before rounding.
pub fn labor_cost_for_minutes(total_min: i64, rate: Decimal) -> Decimal {
    round_cents(Decimal::from(total_min) * rate / Decimal::from(MINUTES_PER_HOUR))
}

pub fn tons(weight_lb: f64) -> f64 {
    weight_lb / POUNDS_PER_TON
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn round_f64(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Labor figures for a single line item
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemEstimate {
    pub item_id: Uuid,
    pub drawing: Option<String>,
    pub detail: Option<String>,
    pub size: Option<String>,
    pub qty: i32,
    pub total_min: i64,
    pub man_hours: Decimal,
    pub labor_cost: Decimal,
    pub weight_lb: f64,
    pub weld_in: f64,
}

impl ItemEstimate {
    pub fn for_item(item: &Item, shop_rate: Decimal) -> Self {
        let total_min = item.minutes.total();

        Self {
            item_id: item.id,
            drawing: item.drawing.clone(),
            detail: item.detail.clone(),
            size: item.size.clone(),
            qty: item.qty,
            total_min,
            man_hours: round_cents(man_hours(total_min)),
            labor_cost: labor_cost_for_minutes(total_min, shop_rate),
            weight_lb: item.weight_lb,
            weld_in: item.weld_in,
        }
    }
}

/// Aggregate labor and material figures for one project
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRollup {
    pub shop_rate: Decimal,
    pub item_count: usize,
    pub total_min: i64,
    pub man_hours: Decimal,
    pub weight_lb: f64,
    pub tons: f64,
    pub weld_in: f64,
    /// Absent when the project has no weight yet
    pub mh_per_ton: Option<f64>,
    pub labor_cost: Decimal,
}

impl ProjectRollup {
    pub fn from_items(shop_rate: Decimal, items: &[Item]) -> Self {
        let total_min: i64 = items.iter().map(|item| item.minutes.total()).sum();
        let weight_lb: f64 = items.iter().map(|item| item.weight_lb).sum();
        let weld_in: f64 = items.iter().map(|item| item.weld_in).sum();

        let hours = man_hours(total_min);
        let project_tons = tons(weight_lb);
        let mh_per_ton = match (project_tons > 0.0, hours.to_f64()) {
            (true, Some(h)) => Some(round_f64(h / project_tons, 2)),
            _ => None,
        };

        Self {
            shop_rate,
            item_count: items.len(),
            total_min,
            man_hours: round_cents(hours),
            weight_lb,
            tons: round_f64(project_tons, 3),
            weld_in,
            mh_per_ton,
            labor_cost: labor_cost_for_minutes(total_min, shop_rate),
        }
    }
}

/// Project rollup plus the per-item lines it was built from
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEstimate {
    pub project_id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub rollup: ProjectRollup,
    pub items: Vec<ItemEstimate>,
}

impl ProjectEstimate {
    pub fn compute(project: &Project, items: &[Item]) -> Self {
        Self {
            project_id: project.id,
            name: project.name.clone(),
            rollup: ProjectRollup::from_items(project.shop_rate, items),
            items: items
                .iter()
                .map(|item| ItemEstimate::for_item(item, project.shop_rate))
                .collect(),
        }
    }
}

/// Headline numbers across every project on the dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub project_count: usize,
    pub total_items: usize,
    pub total_hours: Decimal,
    /// Plain mean of project shop rates, not weighted by hours
    pub avg_rate: Decimal,
    pub total_revenue: Decimal,
    pub total_tons: f64,
    pub total_weld_in: f64,
}

pub fn calculate_totals(projects: &[ProjectRollup]) -> DashboardTotals {
    let total_items: usize = projects.iter().map(|p| p.item_count).sum();
    let total_min: i64 = projects.iter().map(|p| p.total_min).sum();
    let total_weight: f64 = projects.iter().map(|p| p.weight_lb).sum();
    let total_weld_in: f64 = projects.iter().map(|p| p.weld_in).sum();
    let rate_sum: Decimal = projects.iter().map(|p| p.shop_rate).sum();

    // Revenue is minutes x mean rate / 60, kept as one exact quotient
    let (avg_rate, total_revenue) = if projects.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let count = Decimal::from(projects.len());
        let revenue = Decimal::from(total_min) * rate_sum
            / (count * Decimal::from(MINUTES_PER_HOUR));
        (rate_sum / count, round_cents(revenue))
    };

    DashboardTotals {
        project_count: projects.len(),
        total_items,
        total_hours: round_cents(man_hours(total_min)),
        avg_rate: round_cents(avg_rate),
        total_revenue,
        total_tons: round_f64(tons(total_weight), 3),
        total_weld_in,
    }
}
