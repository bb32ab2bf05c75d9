use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::RoomStatus;
use crate::database::repositories::{PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// DELETE /room/delete/:roomId
pub async fn delete(Path(room_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    if room.status == RoomStatus::Rented {
        return Err(ApiError::Conflict("Cannot delete a rented room".to_string()));
    }

    properties.pull_room(room.property, room.id).await?;
    rooms.delete(room.id).await?;

    Ok(Json(json!({ "message": "Room deleted successfully" })))
}
