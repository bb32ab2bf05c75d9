pub mod add_property;
pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod properties;
pub mod remove_property;
pub mod show;
pub mod update;

use serde_json::Value;

use crate::database::models::Landlord;
use crate::database::repositories::PropertyRepository;
use crate::error::ApiError;

/// Serialize a landlord with its `properties` id list resolved to full
/// property records.
async fn resolve_properties(
    properties: &PropertyRepository,
    landlord: &Landlord,
) -> Result<Value, ApiError> {
    let resolved = properties.select_ids(&landlord.properties).await?;
    let mut value = serde_json::to_value(landlord)?;
    value["properties"] = serde_json::to_value(resolved)?;
    Ok(value)
}
