use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::RoomType;
use crate::database::repositories::{LandlordRepository, PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub renting_price: Option<Decimal>,
    pub property: Option<Uuid>,
    pub landlord: Option<Uuid>,
}

/// POST /room/create
pub async fn create(
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(raw_type), Some(renting_price), Some(property_id), Some(landlord_id)) = (
        present(&body.name),
        present(&body.room_type),
        body.renting_price,
        body.property,
        body.landlord,
    ) else {
        return Err(ApiError::Validation(
            "All fields are required: information missing to create a room".to_string(),
        ));
    };

    let room_type = RoomType::parse(raw_type)
        .ok_or_else(|| ApiError::Validation(format!("Unknown room type: {}", raw_type)))?;

    if renting_price <= Decimal::ZERO {
        return Err(ApiError::Validation(
            "Renting price must be a positive number".to_string(),
        ));
    }

    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let property = properties
        .fetch(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
    let landlord = landlords
        .fetch(landlord_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    let room = rooms
        .insert(name, room_type, renting_price, property.id, landlord.id)
        .await?;
    properties.push_room(property.id, room.id).await?;

    Ok((StatusCode::CREATED, Json(serde_json::to_value(room)?)))
}
