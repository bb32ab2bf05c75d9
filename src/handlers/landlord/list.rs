use axum::Json;
use serde_json::{json, Value};

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_properties;

/// GET /landlord/
pub async fn list() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let all = landlords.all().await?;
    let mut resolved = Vec::with_capacity(all.len());
    for landlord in &all {
        resolved.push(resolve_properties(&properties, landlord).await?);
    }

    Ok(Json(json!({
        "message": "Landlords retrieved successfully",
        "landlords": resolved,
    })))
}
