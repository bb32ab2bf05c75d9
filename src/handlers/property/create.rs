use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub landlord_id: Option<Uuid>,
}

/// POST /property/create - create a property and attach it to its landlord
pub async fn create(
    Json(body): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(address), Some(description), Some(landlord_id)) = (
        present(&body.name),
        present(&body.address),
        present(&body.description),
        body.landlord_id,
    ) else {
        return Err(ApiError::Validation(
            "A required variable is missing!!".to_string(),
        ));
    };

    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let landlord = landlords.fetch(landlord_id).await?.ok_or_else(|| {
        ApiError::NotFound("The landlord passed is not valid, no such landlord".to_string())
    })?;

    let property = properties
        .insert(name, address, description, landlord.id)
        .await?;
    landlords.push_property(landlord.id, property.id).await?;

    Ok((StatusCode::CREATED, Json(serde_json::to_value(property)?)))
}
