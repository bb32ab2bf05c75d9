use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// GET /property/:propertyId/rooms
pub async fn rooms_of(Path(property_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let property = properties
        .fetch(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    if property.rooms.is_empty() {
        return Err(ApiError::NotFound(
            "No rooms found for this property".to_string(),
        ));
    }

    let resolved = rooms.select_ids(&property.rooms).await?;
    Ok(Json(json!({ "rooms": resolved })))
}
