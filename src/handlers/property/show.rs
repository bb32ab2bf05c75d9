use axum::extract::Path;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::{PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_rooms;

/// GET /property/get-one/:propertyId
pub async fn show(Path(property_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let property = properties
        .fetch(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
    let property = resolve_rooms(&rooms, &property).await?;

    Ok(Json(property))
}
