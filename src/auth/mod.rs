use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

pub mod password;

/// Claims carried by login tokens: who logged in and for how long.
/// Landlord and tenant logins share this shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(id: Uuid, email: String) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self {
            id,
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("JWT decode error: {0}")]
    TokenDecode(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,
}

pub fn generate_token(claims: Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;
    generate_token_with_secret(claims, secret)
}

pub fn decode_token(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;
    decode_token_with_secret(token, secret)
}

fn generate_token_with_secret(claims: Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

fn decode_token_with_secret(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| JwtError::TokenDecode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_id_and_email() {
        let id = Uuid::new_v4();
        let claims = Claims::new(id, "landlord@example.com".to_string());
        let iat = claims.iat;
        let exp = claims.exp;

        let token = generate_token_with_secret(claims, "test-secret").unwrap();
        let decoded = decode_token_with_secret(&token, "test-secret").unwrap();

        assert_eq!(decoded.id, id);
        assert_eq!(decoded.email, "landlord@example.com");
        assert_eq!(decoded.iat, iat);
        assert_eq!(decoded.exp, exp);
    }

    #[test]
    fn expiry_follows_configured_hours() {
        // Default configuration: 3-hour tokens
        let claims = Claims::new(Uuid::new_v4(), "t@example.com".to_string());
        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 3 * 3600);
    }

    #[test]
    fn empty_secret_refuses_to_sign() {
        let claims = Claims::new(Uuid::new_v4(), "t@example.com".to_string());
        assert!(matches!(
            generate_token_with_secret(claims, ""),
            Err(JwtError::InvalidSecret)
        ));
    }

    #[test]
    fn wrong_secret_fails_to_decode() {
        let claims = Claims::new(Uuid::new_v4(), "t@example.com".to_string());
        let token = generate_token_with_secret(claims, "right").unwrap();
        assert!(decode_token_with_secret(&token, "wrong").is_err());
    }
}
