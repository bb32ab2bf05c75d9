use axum::Json;
use serde_json::{json, Value};

use crate::database::repositories::{LandlordRepository, PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

use super::resolve_rooms;

/// GET /property/ - all properties with landlord and rooms resolved
pub async fn list() -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool.clone());
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let all = properties.all().await?;
    if all.is_empty() {
        return Err(ApiError::NotFound("No properties found".to_string()));
    }

    let mut resolved = Vec::with_capacity(all.len());
    for property in &all {
        let mut value = resolve_rooms(&rooms, property).await?;
        // landlordId becomes a short {id, name, email} summary, null when
        // the property is unowned or the owner record is gone
        value["landlordId"] = match property.landlord_id {
            Some(id) => match landlords.fetch(id).await? {
                Some(landlord) => json!({
                    "id": landlord.id,
                    "name": landlord.name,
                    "email": landlord.email,
                }),
                None => Value::Null,
            },
            None => Value::Null,
        };
        resolved.push(value);
    }

    Ok(Json(Value::Array(resolved)))
}
