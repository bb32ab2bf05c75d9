use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPropertyRequest {
    pub landlord_id: Option<Uuid>,
    pub property_id: Option<Uuid>,
}

/// POST /landlord/add-property/:landlordId
///
/// The path parameter is accepted but ignored; both ids come from the body.
pub async fn add_property(
    Path(_landlord_id): Path<String>,
    Json(body): Json<AddPropertyRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(landlord_id), Some(property_id)) = (body.landlord_id, body.property_id) else {
        return Err(ApiError::Validation(
            "Landlord ID and Property ID are required".to_string(),
        ));
    };

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

    if landlord.properties.contains(&property.id) {
        return Err(ApiError::Conflict(
            "Property already added to this landlord".to_string(),
        ));
    }

    if property.landlord_id.is_some_and(|owner| owner != landlord.id) {
        return Err(ApiError::Conflict(
            "Property is already assigned to another landlord".to_string(),
        ));
    }

    // One-sided append: the property's own landlord reference is not written
    // here, so removal later requires the property to already carry it.
    let landlord = landlords
        .push_property(landlord.id, property.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    Ok(Json(json!({
        "message": "Property added to landlord successfully",
        "landlord": landlord,
    })))
}
