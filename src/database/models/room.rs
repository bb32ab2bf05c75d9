use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A rentable unit within a property.
///
/// `status` and `tenant` are kept in lockstep: a rented room carries the
/// renting tenant's id, an available room carries none.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub renting_price: Decimal,
    pub pictures: Vec<String>,
    pub property: Uuid,
    pub landlord: Uuid,
    pub tenant: Option<Uuid>,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "camelCase")]
#[sqlx(type_name = "room_type", rename_all = "camelCase")]
pub enum RoomType {
    Single,
    BedSitter,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
}

impl RoomType {
    /// Parse the wire literal; `None` for anything outside the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single" => Some(RoomType::Single),
            "bedSitter" => Some(RoomType::BedSitter),
            "oneBedroom" => Some(RoomType::OneBedroom),
            "twoBedroom" => Some(RoomType::TwoBedroom),
            "threeBedroom" => Some(RoomType::ThreeBedroom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Rented,
}

impl RoomStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(RoomStatus::Available),
            "rented" => Some(RoomStatus::Rented),
            _ => None,
        }
    }
}
