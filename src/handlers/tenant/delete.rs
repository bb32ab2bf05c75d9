use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// DELETE /tenant/delete/:tenantId
pub async fn delete(Path(tenant_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let tenant = tenants
        .fetch(tenant_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tenant not found".to_string()))?;

    tenants.delete(tenant.id).await?;

    // Free the rented room, if any; a dangling reference is skipped quietly.
    if let Some(room_id) = tenant.room_rented {
        rooms.mark_available(room_id).await?;
    }

    Ok(Json(json!({ "message": "Tenant deleted successfully" })))
}
