use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::database::repositories::TenantRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// POST /tenant/create-with-no-room
pub async fn create_without_room(
    Json(body): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(email), Some(phone_number), Some(password)) = (
        present(&body.name),
        present(&body.email),
        present(&body.phone_number),
        present(&body.password),
    ) else {
        return Err(ApiError::Validation(
            "All fields are required to create a tenant".to_string(),
        ));
    };

    let password_hash = password::hash_password(password)?;

    let pool = DatabaseManager::pool().await?;
    let tenants = TenantRepository::new(pool);
    let tenant = tenants
        .insert(name, email, phone_number, &password_hash, None, None)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Tenant created successfully",
            "tenant": tenant,
        })),
    ))
}
