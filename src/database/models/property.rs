use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A property owned by at most one landlord, containing rooms.
///
/// `tenants` is declared by the schema but maintained by no handler, matching
/// the stored documents this API has always produced.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub pictures: Vec<String>,
    pub landlord_id: Option<Uuid>,
    pub rooms: Vec<Uuid>,
    pub tenants: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let property = Property {
            id: Uuid::new_v4(),
            name: "Sunset Court".to_string(),
            address: "12 Hill Rd".to_string(),
            description: "Walled compound".to_string(),
            pictures: vec![],
            landlord_id: None,
            rooms: vec![],
            tenants: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&property).unwrap();
        assert!(value.get("landlordId").is_some());
        assert!(value["landlordId"].is_null());
        assert!(value.get("landlord_id").is_none());
    }
}
