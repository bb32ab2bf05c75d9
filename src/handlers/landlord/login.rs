use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, password, Claims};
use crate::database::repositories::LandlordRepository;
use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::handlers::validate::present;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /landlord/login - verify credentials and issue a bearer token
pub async fn login(Json(body): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let (Some(email), Some(password)) = (present(&body.email), present(&body.password)) else {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    };

    let pool = DatabaseManager::pool().await?;
    let landlords = LandlordRepository::new(pool);

    let landlord = landlords
        .fetch_by_email(email)
        .await?
        .ok_or_else(|| ApiError::NotFound("Landlord not found".to_string()))?;

    if !password::verify_password(password, &landlord.password)? {
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    let token = auth::generate_token(Claims::new(landlord.id, landlord.email.clone()))?;

    Ok(Json(json!({
        "token": token,
        "landlord": {
            "id": landlord.id,
            "name": landlord.name,
            "email": landlord.email,
            "phoneNumber": landlord.phone_number,
        },
    })))
}
