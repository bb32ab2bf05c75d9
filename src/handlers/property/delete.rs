use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// DELETE /property/delete/:propertyId
pub async fn delete(Path(property_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let property = properties
        .delete(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    // Cascade: drop the id from every landlord list that holds it. Rooms are
    // left in place and keep their property reference.
    landlords.pull_property_from_all(property.id).await?;

    Ok(Json(json!({ "message": "Property deleted successfully" })))
}
