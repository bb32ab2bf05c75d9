use axum::Json;
use serde_json::Value;

use crate::database::repositories::{PropertyRepository, RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_rentals;

/// GET /tenant/
pub async fn list() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    let all = tenants.all().await?;
    let mut resolved = Vec::with_capacity(all.len());
    for tenant in &all {
        resolved.push(resolve_rentals(&rooms, &properties, tenant).await?);
    }

    Ok(Json(Value::Array(resolved)))
}
