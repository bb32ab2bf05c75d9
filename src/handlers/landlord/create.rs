use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::database::repositories::LandlordRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLandlordRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// POST /landlord/create
pub async fn create(
    Json(body): Json<CreateLandlordRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let (Some(name), Some(email), Some(phone_number), Some(password)) = (
        present(&body.name),
        present(&body.email),
        present(&body.phone_number),
        present(&body.password),
    ) else {
        return Err(ApiError::Validation(
            "All fields are required to create a landlord".to_string(),
        ));
    };

    let password_hash = password::hash_password(password)?;

    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool);
    let landlord = landlords
        .insert(name, email, phone_number, &password_hash)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "landlord": landlord }))))
}
