pub mod create;
pub mod create_with_room;
pub mod delete;
pub mod list;
pub mod login;
pub mod show;
pub mod update;

use serde_json::{json, Value};

use crate::database::models::Tenant;
use crate::database::repositories::{PropertyRepository, RoomRepository};
use crate::error::ApiError;

/// Serialize a tenant with `roomRented`/`propertyRented` resolved to short
/// projections; dangling references resolve to null.
async fn resolve_rentals(
    rooms: &RoomRepository,
    properties: &PropertyRepository,
    tenant: &Tenant,
) -> Result<Value, ApiError> {
    let mut value = serde_json::to_value(tenant)?;

    value["roomRented"] = match tenant.room_rented {
        Some(room_id) => match rooms.fetch(room_id).await? {
            Some(room) => json!({
                "id": room.id,
                "name": room.name,
                "rentingPrice": room.renting_price,
                "status": room.status,
            }),
            None => Value::Null,
        },
        None => Value::Null,
    };

    value["propertyRented"] = match tenant.property_rented {
        Some(property_id) => match properties.fetch(property_id).await? {
            Some(property) => json!({
                "id": property.id,
                "name": property.name,
                "address": property.address,
            }),
            None => Value::Null,
        },
        None => Value::Null,
    };

    Ok(value)
}
