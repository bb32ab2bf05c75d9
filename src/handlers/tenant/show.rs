use axum::extract::Path;
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::{PropertyRepository, RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_rentals;

/// GET /tenant/get-one/:tenantId
pub async fn show(Path(tenant_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let tenant = tenants
        .fetch(tenant_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tenant not found".to_string()))?;
    let tenant = resolve_rentals(&rooms, &properties, &tenant).await?;

    Ok(Json(tenant))
}
