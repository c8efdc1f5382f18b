use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

use crate::{
    api::handlers::{
        auth::{self, password},
        non_empty, storage, Message,
    },
    cli::globals::GlobalArgs,
};

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 404, description = "Unknown email", body = Message),
        (status = 422, description = "Missing field or wrong password", body = Message),
        (status = 500, description = "Lookup or token signing failure", body = Message),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn login(
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let Some(Json(request)) = payload else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("All fields are required")),
        )
            .into_response();
    };

    let (Some(email), Some(password)) = (non_empty(request.email), non_empty(request.password))
    else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("All fields are required")),
        )
            .into_response();
    };

    let credentials = match storage::lookup_credentials(&pool, &email).await {
        Ok(Some(credentials)) => credentials,
        Ok(None) => {
            debug!("User not found");

            return (StatusCode::NOT_FOUND, Json(Message::new("User not found"))).into_response();
        }
        Err(e) => {
            error!("Error fetching user: {e}");

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new("Error fetching user")),
            )
                .into_response();
        }
    };

    if !password::verify_password(&password, &credentials.password_hash) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Message::new("Invalid password")),
        )
            .into_response();
    }

    match auth::sign_token(&globals, credentials.user_id) {
        Ok(token) => {
            debug!("Login successful");

            (
                StatusCode::OK,
                Json(LoginResponse {
                    message: "Logged in successfully".to_string(),
                    token,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error signing token: {e}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new(e.to_string())),
            )
                .into_response()
        }
    }
}
