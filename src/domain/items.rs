//! Line item domain types
//!
//! A line item is one row of the takeoff: a drawing/detail reference, the
//! member description, and the shop labor it needs broken down by operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shop labor for a line item, in minutes per operation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LaborMinutes {
    pub cut_min: i32,
    pub fit_min: i32,
    pub weld_min: i32,
    pub grind_min: i32,
    pub prep_min: i32,
    pub paint_min: i32,
    pub handle_min: i32,
    pub load_min: i32,
}

impl LaborMinutes {
    fn fields(&self) -> [(&'static str, i32); 8] {
        [
            ("cutMin", self.cut_min),
            ("fitMin", self.fit_min),
            ("weldMin", self.weld_min),
            ("grindMin", self.grind_min),
            ("prepMin", self.prep_min),
            ("paintMin", self.paint_min),
            ("handleMin", self.handle_min),
            ("loadMin", self.load_min),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.fields().iter().find(|(_, value)| *value < 0) {
            Some((name, _)) => Err(format!("{name} cannot be negative")),
            None => Ok(()),
        }
    }
}

/// Line item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub project_id: Uuid,
    pub drawing: Option<String>,
    pub detail: Option<String>,
    pub gridline: Option<String>,
    pub category: Option<String>,
    pub shape: Option<String>,
    pub size: Option<String>,
    pub length_ft: Option<f64>,
    pub qty: i32,
    pub weight_lb: f64,
    pub weld_in: f64,
    #[serde(flatten)]
    pub minutes: LaborMinutes,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_qty() -> i32 {
    1
}

/// Item fields as supplied by a client, before the store assigns an id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(default)]
    pub drawing: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub gridline: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub length_ft: Option<f64>,
    #[serde(default = "default_qty")]
    pub qty: i32,
    #[serde(default)]
    pub weight_lb: f64,
    #[serde(default)]
    pub weld_in: f64,
    #[serde(flatten)]
    pub minutes: LaborMinutes,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Default for NewItem {
    fn default() -> Self {
        Self {
            drawing: None,
            detail: None,
            gridline: None,
            category: None,
            shape: None,
            size: None,
            length_ft: None,
            qty: default_qty(),
            weight_lb: 0.0,
            weld_in: 0.0,
            minutes: LaborMinutes::default(),
            notes: None,
        }
    }
}

impl NewItem {
    pub fn validate(&self) -> Result<(), String> {
        if self.qty < 0 {
            return Err("qty cannot be negative".to_string());
        }
        if self.weight_lb < 0.0 || self.weld_in < 0.0 {
            return Err("weightLb and weldIn cannot be negative".to_string());
        }
        if self.length_ft.is_some_and(|len| len < 0.0) {
            return Err("lengthFt cannot be negative".to_string());
        }
        self.minutes.validate()
    }
}

/// Request DTO for adding an item to an existing project
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub project_id: Uuid,
    #[serde(flatten)]
    pub item: NewItem,
}

/// Request DTO for updating an item; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub drawing: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub gridline: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub length_ft: Option<f64>,
    #[serde(default)]
    pub qty: Option<i32>,
    #[serde(default)]
    pub weight_lb: Option<f64>,
    #[serde(default)]
    pub weld_in: Option<f64>,
    #[serde(default)]
    pub cut_min: Option<i32>,
    #[serde(default)]
    pub fit_min: Option<i32>,
    #[serde(default)]
    pub weld_min: Option<i32>,
    #[serde(default)]
    pub grind_min: Option<i32>,
    #[serde(default)]
    pub prep_min: Option<i32>,
    #[serde(default)]
    pub paint_min: Option<i32>,
    #[serde(default)]
    pub handle_min: Option<i32>,
    #[serde(default)]
    pub load_min: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateItemRequest {
    pub fn validate(&self) -> Result<(), String> {
        let counts = [
            ("qty", self.qty),
            ("cutMin", self.cut_min),
            ("fitMin", self.fit_min),
            ("weldMin", self.weld_min),
            ("grindMin", self.grind_min),
            ("prepMin", self.prep_min),
            ("paintMin", self.paint_min),
            ("handleMin", self.handle_min),
            ("loadMin", self.load_min),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, v)| v.is_some_and(|v| v < 0)) {
            return Err(format!("{name} cannot be negative"));
        }

        let measures = [
            ("lengthFt", self.length_ft),
            ("weightLb", self.weight_lb),
            ("weldIn", self.weld_in),
        ];
        if let Some((name, _)) = measures.iter().find(|(_, v)| v.is_some_and(|v| v < 0.0)) {
            return Err(format!("{name} cannot be negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_item_defaults() {
        let item: NewItem = serde_json::from_value(json!({ "size": "12x12x1/2" })).unwrap();

        assert_eq!(item.qty, 1);
        assert_eq!(item.weight_lb, 0.0);
        assert_eq!(item.minutes, LaborMinutes::default());
        assert!(item.length_ft.is_none());
    }

    #[test]
    fn create_item_request_flattens_fields() {
        let project_id = Uuid::new_v4();
        let req: CreateItemRequest = serde_json::from_value(json!({
            "projectId": project_id,
            "category": "Base Plate",
            "qty": 1,
            "weightLb": 20.4,
            "weldIn": 48.0,
            "fitMin": 20,
            "paintMin": 5
        }))
        .unwrap();

        assert_eq!(req.project_id, project_id);
        assert_eq!(req.item.category.as_deref(), Some("Base Plate"));
        assert_eq!(req.item.weld_in, 48.0);
        assert_eq!(req.item.minutes.fit_min, 20);
        assert_eq!(req.item.minutes.paint_min, 5);
    }

    #[test]
    fn negative_minutes_are_rejected() {
        let item: NewItem = serde_json::from_value(json!({ "grindMin": -5 })).unwrap();
        assert_eq!(item.validate().unwrap_err(), "grindMin cannot be negative");

        let update = UpdateItemRequest {
            weld_in: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap_err(), "weldIn cannot be negative");
    }

    #[test]
    fn item_serializes_minutes_inline() {
        let item = Item {
            id: Uuid::nil(),
            project_id: Uuid::nil(),
            drawing: Some("S2.4".into()),
            detail: Some("2.5".into()),
            gridline: None,
            category: Some("Beam".into()),
            shape: Some("W-Shape".into()),
            size: Some("W12x26".into()),
            length_ft: Some(18.0),
            qty: 2,
            weight_lb: 468.0,
            weld_in: 0.0,
            minutes: LaborMinutes {
                cut_min: 30,
                ..Default::default()
            },
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["cutMin"], 30);
        assert_eq!(value["lengthFt"], 18.0);
        assert_eq!(value["projectId"], Uuid::nil().to_string());
    }
}
