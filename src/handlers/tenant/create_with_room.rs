use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::password;
use crate::database::models::RoomStatus;
use crate::database::repositories::{PropertyRepository, RoomRepository, TenantRepository};
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantWithRoomRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub room_rented: Option<Uuid>,
    pub property_rented: Option<Uuid>,
}

/// POST /tenant/create - create a tenant already bound to a room
pub async fn create_with_room(
    Json(body): Json<CreateTenantWithRoomRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (
        Some(name),
        Some(email),
        Some(phone_number),
        Some(password),
        Some(room_id),
        Some(property_id),
    ) = (
        present(&body.name),
        present(&body.email),
        present(&body.phone_number),
        present(&body.password),
        body.room_rented,
        body.property_rented,
    )
    else {
        return Err(ApiError::Validation(
            "All fields are required to create a tenant".to_string(),
        ));
    };

    let pool = DatabaseManager::pool().await?;
    let properties = PropertyRepository::new(pool.clone());
    let rooms = RoomRepository::new(pool.clone());
    let tenants = TenantRepository::new(pool);

    if tenants.fetch_by_email(email).await?.is_some() {
        return Err(ApiError::Conflict("Tenant already exists".to_string()));
    }

    let room = rooms
        .fetch(room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Room not found".to_string()))?;
    let property = properties
        .fetch(property_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Property not found".to_string()))?;

    if room.property != property.id {
        return Err(ApiError::BadRequest(
            "Room does not belong to the specified property".to_string(),
        ));
    }

    if room.status != RoomStatus::Available {
        return Err(ApiError::BadRequest(
            "Room is not available for rent".to_string(),
        ));
    }

    let password_hash = password::hash_password(password)?;
    let tenant = tenants
        .insert(
            name,
            email,
            phone_number,
            &password_hash,
            Some(room.id),
            Some(property.id),
        )
        .await?;

    // Unlike the rent flow, this path has never touched the property's
    // rooms/tenants lists; only the room itself is updated.
    rooms.mark_rented(room.id, tenant.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Tenant created successfully",
            "tenant": tenant,
        })),
    ))
}
