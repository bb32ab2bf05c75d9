use axum::extract::Path;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::password;
use crate::database::repositories::TenantRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub room_rented: Option<Uuid>,
    pub property_rented: Option<Uuid>,
}

/// PUT /tenant/update/:tenantId
///
/// Patch semantics: an omitted field keeps its stored value, a supplied
/// field replaces it. A supplied password is re-hashed before storage.
pub async fn update(
    Path(tenant_id): Path<Uuid>,
    Json(body): Json<UpdateTenantRequest>,
) -> Result<Json<Value>, ApiError> {
    let password_hash = match body.password.as_deref() {
        Some(new_password) => Some(password::hash_password(new_password)?),
        None => None,
    };

    let pool = DatabaseManager::pool().await?;
    let tenants = TenantRepository::new(pool);

    let tenant = tenants
        .patch(
            tenant_id,
            body.name.as_deref(),
            body.email.as_deref(),
            body.phone_number.as_deref(),
            password_hash.as_deref(),
            body.room_rented,
            body.property_rented,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Tenant not found".to_string()))?;

    Ok(Json(json!({
        "message": "Tenant updated successfully",
        "tenant": tenant,
    })))
}
