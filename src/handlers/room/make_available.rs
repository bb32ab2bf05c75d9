use axum::extract::Path;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::RoomStatus;
use crate::database::repositories::{RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// PUT /room/make-available/:roomId - release a rented room, clearing the
/// tenant's references symmetrically
pub async fn make_available(Path(room_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    if room.status == RoomStatus::Available {
        return Err(ApiError::Conflict("Room is already available".to_string()));
    }

    let Some(tenant_id) = room.tenant else {
        return Err(ApiError::BadRequest(
            "Room has no tenant to release".to_string(),
        ));
    };

    let tenant = tenants
        .fetch(tenant_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tenant not found".to_string()))?;

    tenants.clear_rented(tenant.id).await?;
    let updated = rooms
        .mark_available(room.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(serde_json::to_value(updated)?))
}
