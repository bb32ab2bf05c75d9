use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::PropertyRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
pub struct UpdatePropertyRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

/// PUT /property/update/:propertyId - full replacement of the three fields
pub async fn update(
    Path(property_id): Path<Uuid>,
    Json(body): Json<UpdatePropertyRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(name), Some(address), Some(description)) = (
        present(&body.name),
        present(&body.address),
        present(&body.description),
    ) else {
        return Err(ApiError::Validation("All fields are required".to_string()));
    };

    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool);
    let property = properties
        .update_details(property_id, name, address, description)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    Ok(Json(serde_json::to_value(property)?))
}
