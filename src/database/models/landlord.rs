use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A landlord account. `properties` is the ordered set of owned property
/// ids; the password column holds an Argon2id hash and never serializes.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Landlord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub properties: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_without_password() {
        let landlord = Landlord {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "0712000001".to_string(),
            password: "$argon2id$...".to_string(),
            properties: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&landlord).unwrap();
        assert!(value.get("phoneNumber").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("password").is_none());
        assert!(value["properties"].as_array().unwrap().is_empty());
    }
}
