pub mod create;
pub mod delete;
pub mod list;
pub mod rooms;
pub mod show;
pub mod update;

use serde_json::Value;

use crate::database::models::Property;
use crate::database::repositories::RoomRepository;
use crate::error::ApiError;

/// Serialize a property with its `rooms` id list resolved to full records.
async fn resolve_rooms(rooms: &RoomRepository, property: &Property) -> Result<Value, ApiError> {
    let resolved = rooms.select_ids(&property.rooms).await?;
    let mut value = serde_json::to_value(property)?;
    value["rooms"] = serde_json::to_value(resolved)?;
    Ok(value)
}
