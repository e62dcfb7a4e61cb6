//! Storage shapes - the record forms as persisted in the remote store
//!
//! One serde struct per remote table, carrying primitive display-neutral
//! values (named icon identifiers, separate from/to color tokens, an
//! explicit integer `order`). Rows arrive from the store as a string `id`
//! plus the row fields; [`RowEnvelope`] captures that split so the row
//! structs themselves stay id-free (inserts omit the id and let the store
//! assign one).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Remote table names
pub const PERSONAL_INFO: &str = "personal_info";
pub const STATS: &str = "stats";
pub const EXPERIENCES: &str = "experiences";
pub const SKILLS: &str = "skills";
pub const TECH_CATEGORIES: &str = "tech_categories";
pub const PROJECTS: &str = "projects";
pub const SOCIAL_LINKS: &str = "social_links";
pub const CONTACT_MESSAGES: &str = "contact_messages";

/// A stored row: the store-assigned id plus the flattened row fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowEnvelope<R> {
    pub id: String,
    #[serde(flatten)]
    pub row: R,
}

impl<R: DeserializeOwned> RowEnvelope<R> {
    /// Parse an envelope from a raw store row
    pub fn from_value(value: serde_json::Value) -> crate::types::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub name: String,
    pub full_name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    pub bio: String,
    pub extended_bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRow {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRow {
    pub name: String,
    pub level: u8,
    pub icon_name: String,
    pub color_from: String,
    pub color_to: String,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechCategoryRow {
    pub title: String,
    pub icon_name: String,
    pub gradient_from: String,
    pub gradient_to: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRow {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub gradient_from: String,
    pub gradient_to: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinkRow {
    pub platform: String,
    pub label: String,
    pub href: String,
    pub username: String,
    #[serde(default)]
    pub order: i32,
}

/// A visitor-submitted contact message as stored in `contact_messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageRow {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_splits_id_from_row() {
        let envelope: RowEnvelope<StatRow> = RowEnvelope::from_value(json!({
            "id": "abc-123",
            "value": "99+",
            "label": "Projects",
            "order": 1,
        }))
        .unwrap();

        assert_eq!(envelope.id, "abc-123");
        assert_eq!(envelope.row.value, "99+");
        assert_eq!(envelope.row.order, 1);
    }

    #[test]
    fn optional_fields_default() {
        let row: ProjectRow = serde_json::from_value(json!({
            "title": "Demo",
            "category": "Tooling",
            "description": "A demo project",
            "gradient_from": "blue-600",
            "gradient_to": "cyan-600",
        }))
        .unwrap();

        assert!(row.tags.is_empty());
        assert_eq!(row.live_url, None);
        assert_eq!(row.order, 0);
    }

    #[test]
    fn row_serialization_carries_no_id() {
        let row = StatRow {
            value: "5+".into(),
            label: "Years".into(),
            order: 2,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["order"], 2);
    }
}
