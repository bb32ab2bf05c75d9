use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::RoomStatus;
use crate::database::repositories::{RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub status: Option<String>,
}

/// PUT /room/update-availability/:roomId
///
/// The tenant is located by reverse lookup (`roomRented` pointing at this
/// room) rather than taken from the request, so only a room some tenant
/// already references can be toggled either way.
pub async fn update_availability(
    Path(room_id): Path<Uuid>,
    Json(body): Json<UpdateAvailabilityRequest>,
) -> Result<Json<Value>, ApiError> {
    let Some(raw_status) = present(&body.status) else {
        return Err(ApiError::Validation("Status is required".to_string()));
    };
    let status = RoomStatus::parse(raw_status).ok_or_else(|| {
        ApiError::Validation("Status must be either 'available' or 'rented'".to_string())
    })?;

    let pool = DatabaseManager::pool().await?;
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;
    let tenant = tenants
        .fetch_by_room(room.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No tenant is associated with this room".to_string()))?;

    let updated = match status {
        RoomStatus::Available => {
            let updated = rooms.mark_available(room.id).await?;
            tenants.set_room_rented(tenant.id, None).await?;
            updated
        }
        RoomStatus::Rented => {
            let updated = rooms.mark_rented(room.id, tenant.id).await?;
            tenants.set_room_rented(tenant.id, Some(room.id)).await?;
            updated
        }
    }
    .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    Ok(Json(serde_json::to_value(updated)?))
}
