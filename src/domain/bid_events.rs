use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated entry on a project's bid calendar (walkthroughs, RFI cutoffs, bid due)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidEvent {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a bid event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidEventRequest {
    pub project_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
}

impl CreateBidEventRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title is required".to_string());
        }
        if self.ends_at.is_some_and(|ends| ends < self.starts_at) {
            return Err("Event cannot end before it starts".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_accepts_null_end() {
        let req: CreateBidEventRequest = serde_json::from_value(json!({
            "projectId": Uuid::new_v4(),
            "title": "Bid due",
            "startsAt": "2025-02-14T15:00:00.000Z",
            "endsAt": null,
            "allDay": true
        }))
        .unwrap();

        assert!(req.all_day);
        assert!(req.ends_at.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let req: CreateBidEventRequest = serde_json::from_value(json!({
            "projectId": Uuid::new_v4(),
            "title": "Pre-bid walkthrough",
            "startsAt": "2025-02-14T15:00:00Z",
            "endsAt": "2025-02-14T14:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            req.validate().unwrap_err(),
            "Event cannot end before it starts"
        );
    }
}
