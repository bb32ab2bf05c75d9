use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::database::repositories::{PropertyRepository, RoomRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomsQuery {
    pub property_id: Option<Uuid>,
}

/// GET /room/ - all rooms, optionally filtered to one property
pub async fn list(Query(query): Query<ListRoomsQuery>) -> Result<Json<Value>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool);

    let all = match query.property_id {
        Some(property_id) => {
            let property = properties
                .fetch(property_id)
                .await?
                .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;
            rooms.by_property(property.id).await?
        }
        None => rooms.all().await?,
    };

    Ok(Json(serde_json::to_value(all)?))
}
