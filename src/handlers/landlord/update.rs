use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::LandlordRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLandlordRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// PUT /landlord/update/:landlordId - full replacement of the three fields
pub async fn update(
    Path(landlord_id): Path<Uuid>,
    Json(body): Json<UpdateLandlordRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(name), Some(email), Some(phone_number)) = (
        present(&body.name),
        present(&body.email),
        present(&body.phone_number),
    ) else {
        return Err(ApiError::Validation(
            "All fields are required to update a landlord".to_string(),
        ));
    };

    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool);
    let landlord = landlords
        .update_details(landlord_id, name, email, phone_number)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    Ok(Json(json!({
        "message": "Landlord updated successfully",
        "landlord": landlord,
    })))
}
