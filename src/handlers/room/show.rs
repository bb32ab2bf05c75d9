use axum::extract::Path;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::{
    LandlordRepository, PropertyRepository, RoomRepository, TenantRepository,
};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// GET /room/get-one/:roomId - property, landlord and tenant resolved in full
pub async fn show(Path(room_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    let mut value = serde_json::to_value(&room)?;
    value["property"] = serde_json::to_value(properties.fetch(room.property).await?)?;
    value["landlord"] = serde_json::to_value(landlords.fetch(room.landlord).await?)?;
    value["tenant"] = match room.tenant {
        Some(tenant_id) => serde_json::to_value(tenants.fetch(tenant_id).await?)?,
        None => Value::Null,
    };

    Ok(Json(value))
}
