use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::items::{Item, NewItem};

/// Where a project sits in the bid cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Draft,
    #[default]
    Active,
    Submitted,
    Awarded,
    Lost,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Submitted => "submitted",
            Self::Awarded => "awarded",
            Self::Lost => "lost",
        }
    }

    /// Unknown values read back from the store are treated as active.
    pub fn from_db(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            "submitted" => Self::Submitted,
            "awarded" => Self::Awarded,
            "lost" => Self::Lost,
            _ => Self::Active,
        }
    }
}

/// Project entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client: Option<String>,
    pub location: Option<String>,
    pub status: ProjectStatus,
    /// Labor rate in dollars per hour
    pub shop_rate: Decimal,
    pub units: String,
    pub estimator: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub bid_due_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project together with its line items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectWithItems {
    #[serde(flatten)]
    pub project: Project,
    pub items: Vec<Item>,
}

/// Request DTO for creating a project
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub shop_rate: Option<Decimal>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub estimator: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub bid_due_at: Option<DateTime<Utc>>,
    /// Line items created alongside the project
    #[serde(default)]
    pub items: Vec<NewItem>,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Project name is required".to_string());
        }
        if self.shop_rate.is_some_and(|rate| rate.is_sign_negative()) {
            return Err("Shop rate cannot be negative".to_string());
        }
        self.items.iter().try_for_each(NewItem::validate)
    }
}

/// Request DTO for updating a project; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub shop_rate: Option<Decimal>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub estimator: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub bid_due_at: Option<DateTime<Utc>>,
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err("Project name cannot be empty".to_string());
        }
        if self.shop_rate.is_some_and(|rate| rate.is_sign_negative()) {
            return Err("Shop rate cannot be negative".to_string());
        }
        Ok(())
    }
}
