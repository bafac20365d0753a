use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub exp: usize,
    pub iat: usize,
    pub token_type: String,
}

/// HS256 access-token codec shared with the auth provider.
#[derive(Clone)]
pub struct JwtConfig {
    jwt_secret: String,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            access_ttl: Duration::minutes(60),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i64, token_type: &str) -> Result<String, ServiceError> {
        if token_type != "access" {
            return Err(ServiceError::InvalidTokenType);
        }

        let now = Utc::now();
        let claims = Claims {
            user_id,
            exp: (now + self.access_ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
            token_type: token_type.to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: &str) -> Result<i64, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(
            |err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(err),
            },
        )?;

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.user_id)
    }
}
