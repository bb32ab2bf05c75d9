use axum::extract::Path;
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::repositories::{LandlordRepository, PropertyRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// DELETE /landlord/delete/:landlordId
pub async fn delete(Path(landlord_id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool);

    let landlord = landlords
        .delete(landlord_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    // Cascade: orphan every property still referencing the landlord. Tenants
    // carry no landlord reference, so there is nothing further to cascade.
    // Sequential writes, no rollback if interrupted part-way.
    properties.clear_landlord_for_all(landlord.id).await?;

    Ok(Json(json!({
        "message": "Landlord deleted successfully",
        "landlord": landlord,
    })))
}
