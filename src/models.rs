//! Frontend Models
//!
//! Data structures matching backend JSON (camelCase field names).

use collection_view::{FieldValue, Record};
use serde::{Deserialize, Serialize};

// ========================
// Organizations
// ========================

/// Organization listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: u64,
    pub org_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub org_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields the organization search box looks at
pub const ORGANIZATION_SEARCH_FIELDS: &[&str] = &["orgName", "description", "orgUrl"];

impl Record for Organization {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Int(self.id as i64)),
            "orgName" => Some(FieldValue::text(&self.org_name)),
            "description" => self.description.as_deref().map(FieldValue::text),
            "orgUrl" => self.org_url.as_deref().map(FieldValue::text),
            "isActive" => Some(FieldValue::Bool(self.is_active)),
            "createdAt" => self.created_at.as_deref().map(FieldValue::text),
            _ => None,
        }
    }
}

/// Body of `POST /organizations`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub org_name: String,
    pub description: String,
    pub org_url: String,
    pub org_secret: String,
}

// ========================
// AI Models
// ========================

/// AI model listing (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub id: u64,
    pub model_name: String,
    #[serde(default)]
    pub model_description: Option<String>,
    #[serde(default)]
    pub model_category: Option<String>,
    #[serde(default)]
    pub pricing_type: Option<String>,
    #[serde(default)]
    pub model_price: Option<f64>,
    #[serde(default)]
    pub pricing_unit: Option<String>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub const MODEL_SEARCH_FIELDS: &[&str] = &["modelName", "modelDescription", "modelCategory"];

impl Record for AiModel {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Int(self.id as i64)),
            "modelName" => Some(FieldValue::text(&self.model_name)),
            "modelDescription" => self.model_description.as_deref().map(FieldValue::text),
            "modelCategory" => self.model_category.as_deref().map(FieldValue::text),
            "pricingType" => self.pricing_type.as_deref().map(FieldValue::text),
            "modelPrice" => self.model_price.map(FieldValue::Float),
            "likeCount" => self.like_count.map(FieldValue::Int),
            "viewCount" => self.view_count.map(FieldValue::Int),
            "averageRating" => self.average_rating.map(FieldValue::Float),
            "createdAt" => self.created_at.as_deref().map(FieldValue::text),
            _ => None,
        }
    }
}

pub const MODEL_CATEGORIES: &[&str] = &[
    "LANGUAGE_MODEL",
    "COMPUTER_VISION",
    "AUDIO_PROCESSING",
    "TEXT_TO_SPEECH",
    "SPEECH_TO_TEXT",
    "IMAGE_GENERATION",
    "VIDEO_PROCESSING",
    "NATURAL_LANGUAGE_PROCESSING",
];

pub const PRICING_TYPES: &[&str] = &["FREE", "FREEMIUM", "PAID", "SUBSCRIPTION", "PAY_PER_USE"];

/// (value, label) pairs for the model sort selector; value is `key,direction`
pub const MODEL_SORT_OPTIONS: &[(&str, &str)] = &[
    ("createdAt,desc", "Newest First"),
    ("viewCount,desc", "Most Viewed"),
    ("likeCount,desc", "Most Liked"),
    ("averageRating,desc", "Highest Rated"),
    ("modelName,asc", "Name A-Z"),
];

// ========================
// Notifications
// ========================

/// Notification for the signed-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

pub const NOTIFICATION_SEARCH_FIELDS: &[&str] = &["title", "message"];

impl Record for Notification {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Int(self.id as i64)),
            "title" => Some(FieldValue::text(&self.title)),
            "message" => self.message.as_deref().map(FieldValue::text),
            "type" => self.kind.as_deref().map(FieldValue::text),
            "isRead" => Some(FieldValue::Bool(self.is_read)),
            "createdAt" => self.created_at.as_deref().map(FieldValue::text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_organization_from_backend_json() {
        let org: Organization = serde_json::from_value(json!({
            "id": 3,
            "orgName": "Acme",
            "orgUrl": null,
            "isActive": true,
            "createdAt": "2024-05-01 09:30:00"
        }))
        .unwrap();
        assert_eq!(org.field("orgName"), Some(FieldValue::text("Acme")));
        assert_eq!(org.field("orgUrl"), None);
        assert_eq!(org.field("description"), None);
        assert_eq!(org.id(), 3);
    }

    #[test]
    fn test_new_organization_wire_names() {
        let body = serde_json::to_value(NewOrganization {
            org_name: "Acme".into(),
            description: "d".into(),
            org_url: "https://acme.io".into(),
            org_secret: "s".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"orgName": "Acme", "description": "d", "orgUrl": "https://acme.io", "orgSecret": "s"})
        );
    }

    #[test]
    fn test_notification_read_flag() {
        let n: Notification =
            serde_json::from_value(json!({"id": 1, "title": "Hi", "isRead": false, "type": "COMMENT"})).unwrap();
        assert!(!n.is_read);
        assert_eq!(n.field("type"), Some(FieldValue::text("COMMENT")));
    }
}
