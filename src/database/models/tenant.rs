use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A tenant account renting at most one room at a time.
///
/// `property_rented` is a denormalized copy of the rented room's property,
/// set and cleared alongside `room_rented`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub room_rented: Option<Uuid>,
    pub property_rented: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
