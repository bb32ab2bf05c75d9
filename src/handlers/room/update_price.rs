use axum::extract::Path;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::RoomRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentingPriceRequest {
    pub renting_price: Option<Decimal>,
}

/// PUT /room/update-renting-price/:roomId
pub async fn update_price(
    Path(room_id): Path<Uuid>,
    Json(body): Json<UpdateRentingPriceRequest>,
) -> Result<Json<Value>, ApiError> {
    let renting_price = match body.renting_price {
        Some(price) if price > Decimal::ZERO => price,
        _ => {
            return Err(ApiError::Validation(
                "A valid positive renting price is required".to_string(),
            ))
        }
    };

    let pool = DatabaseManager::pool().await?;
    let rooms = RoomRepository::new(pool);
    let room = rooms
        .update_price(room_id, renting_price)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(serde_json::to_value(room)?))
}
