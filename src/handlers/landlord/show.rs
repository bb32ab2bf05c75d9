use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_properties;

/// GET /landlord/get-one/:landlordId
pub async fn show(Path(landlord_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let landlord = landlords
        .fetch(landlord_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;
    let landlord = resolve_properties(&properties, &landlord).await?;

    Ok(Json(json!({
        "message": "Landlord retrieved successfully",
        "landlord": landlord,
    })))
}
