use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

use crate::{
    api::handlers::{auth::password, non_empty, storage, valid_email, Message},
    cli::globals::GlobalArgs,
};

/// Registration payload. Fields are optional so absent and empty values get
/// the same 422 instead of a generic deserialization failure.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    #[serde(rename = "confirmPassword")]
    confirm_password: Option<String>,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = Message, content_type = "application/json"),
        (status = 422, description = "Missing field, password mismatch, or email already registered", body = Message),
        (status = 500, description = "Persistence failure", body = Message),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn register(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<RegisterRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("All fields are required")),
        );
    };

    let (Some(name), Some(email), Some(password), Some(confirm_password)) = (
        non_empty(request.name),
        non_empty(request.email),
        non_empty(request.password),
        non_empty(request.confirm_password),
    ) else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("All fields are required")),
        );
    };

    if password != confirm_password {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("Passwords do not match")),
        );
    }

    if !valid_email(&email) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("Invalid email")),
        );
    }

    let password_hash = match password::hash_password(&password, globals.bcrypt_cost) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Error hashing password: {e}");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new(e.to_string())),
            );
        }
    };

    // The unique constraint on email is the conflict check; no separate
    // existence read.
    match storage::insert_user(&pool, &name, &email, &password_hash).await {
        Ok(storage::InsertOutcome::Created(id)) => {
            debug!("User created: {id}");

            (
                StatusCode::CREATED,
                Json(Message::new("User created successfully")),
            )
        }
        Ok(storage::InsertOutcome::Conflict) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("Email already registered")),
        ),
        Err(e) => {
            error!("Error inserting user: {e}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new(e.to_string())),
            )
        }
    }
}
