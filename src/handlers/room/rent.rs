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
#[serde(rename_all = "camelCase")]
pub struct RentRoomRequest {
    pub tenant_phone: Option<String>,
}

/// POST /room/rent/:roomId - rent a room to the tenant with the given phone
pub async fn rent(
    Path(room_id): Path<Uuid>,
    Json(body): Json<RentRoomRequest>,
) -> Result<Json<Value>, ApiError> {
    let Some(tenant_phone) = present(&body.tenant_phone) else {
        return Err(ApiError::Validation(
            "Tenant phone number is required".to_string(),
        ));
    };

    let pool = DatabaseManager::pool().await?;
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;

    if room.status == RoomStatus::Rented {
        return Err(ApiError::Conflict("Room is already rented".to_string()));
    }

    let tenant = tenants
        .fetch_by_phone(tenant_phone)
        .await?
        .ok_or_else(|| ApiError::NotFound("No tenant found with that phone number".to_string()))?;

    if tenant.room_rented.is_some() {
        return Err(ApiError::Conflict(
            "Tenant has already rented a room".to_string(),
        ));
    }

    let updated = rooms
        .mark_rented(room.id, tenant.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;
    tenants.assign_room(tenant.id, room.id, room.property).await?;

    Ok(Json(serde_json::to_value(updated)?))
}
