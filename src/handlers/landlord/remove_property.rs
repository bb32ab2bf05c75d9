use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// DELETE /landlord/remove-property/:landlordId/:propertyId
pub async fn remove_property(
    Path((landlord_id, property_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let landlord = landlords
        .fetch(landlord_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;
    let property = properties
        .fetch(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    // Both sides must agree before the link is torn down.
    if !landlord.properties.contains(&property.id) || property.landlord_id != Some(landlord.id) {
        return Err(ApiError::NotFound(
            "Property not found in this landlord's properties".to_string(),
        ));
    }

    properties.set_landlord(property.id, None).await?;
    let landlord = landlords
        .pull_property(landlord.id, property.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    Ok(Json(json!({
        "message": "Property removed from landlord successfully",
        "landlord": landlord,
    })))
}
