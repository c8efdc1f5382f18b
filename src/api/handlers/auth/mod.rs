//! Bearer token signing, verification, and the handler-level guard.
//!
//! Tokens are stateless HS256 JWTs; nothing is stored server-side. A token is
//! valid when its signature checks out against the shared secret and its
//! expiry claim has not passed.

use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use tracing::error;
use uuid::Uuid;

use crate::{api::handlers::Message, cli::globals::GlobalArgs};

pub mod password;

/// Claims carried by every issued token.
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Authenticated caller context derived from a verified token.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: Uuid,
}

fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Sign a token embedding the user id.
///
/// # Errors
/// Returns an error if the signing primitive fails.
pub fn sign_token(globals: &GlobalArgs, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_unix_seconds();

    let claims = Claims {
        id: user_id,
        iat: now,
        exp: now + globals.token_ttl_seconds,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(globals.token_secret.expose_secret().as_bytes()),
    )
}

/// Verify a token's signature and expiry against the shared secret.
///
/// # Errors
/// Returns an error for a bad signature, malformed token, or expired claim.
pub fn verify_token(globals: &GlobalArgs, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(globals.token_secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

/// Guard for protected handlers: require a valid `Authorization: Bearer` token.
///
/// A missing header or empty token segment is 401; a token that fails
/// verification is 400, preserving the original API's convention.
///
/// # Errors
/// Returns the ready-to-send rejection response on failure.
pub fn require_bearer(
    headers: &HeaderMap,
    globals: &GlobalArgs,
) -> Result<Principal, (StatusCode, Json<Message>)> {
    let Some(token) = extract_bearer_token(headers) else {
        return Err((StatusCode::UNAUTHORIZED, Json(Message::new("Access denied"))));
    };

    match verify_token(globals, &token) {
        Ok(claims) => Ok(Principal {
            user_id: claims.id,
        }),
        Err(e) => {
            error!("Token verification failed: {e}");

            Err((StatusCode::BAD_REQUEST, Json(Message::new("Invalid token"))))
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use secrecy::SecretString;

    fn test_globals(secret: &str) -> GlobalArgs {
        GlobalArgs::new(SecretString::from(secret.to_string()), 3600, 4)
    }

    #[test]
    fn test_sign_and_verify_round_trip() {
        let globals = test_globals("secret");
        let user_id = Uuid::new_v4();

        let token = sign_token(&globals, user_id).unwrap();
        let claims = verify_token(&globals, &token).unwrap();

        assert_eq!(claims.id, user_id);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let globals = test_globals("secret");
        let token = sign_token(&globals, Uuid::new_v4()).unwrap();

        let other = test_globals("other-secret");
        assert!(verify_token(&other, &token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // TTL well past the default 60s decode leeway
        let globals = GlobalArgs::new(SecretString::from("secret".to_string()), -3600, 4);
        let token = sign_token(&globals, Uuid::new_v4()).unwrap();

        assert!(verify_token(&globals, &token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let globals = test_globals("secret");
        assert!(verify_token(&globals, "not-a-token").is_err());
    }

    #[test]
    fn test_require_bearer_missing_header() {
        let globals = test_globals("secret");
        let headers = HeaderMap::new();

        let err = require_bearer(&headers, &globals).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_require_bearer_empty_token_segment() {
        let globals = test_globals("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));

        let err = require_bearer(&headers, &globals).unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_require_bearer_invalid_token() {
        let globals = test_globals("secret");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"));

        let err = require_bearer(&headers, &globals).unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_require_bearer_accepts_valid_token() {
        let globals = test_globals("secret");
        let user_id = Uuid::new_v4();
        let token = sign_token(&globals, user_id).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let principal = require_bearer(&headers, &globals).unwrap();
        assert_eq!(principal.user_id, user_id);
    }
}
