use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::handlers::{auth, storage, Message},
    cli::globals::GlobalArgs,
};

/// User record with the password hash projected out.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub user: PublicUser,
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = String, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User record", body = UserResponse, content_type = "application/json"),
        (status = 401, description = "Missing bearer token", body = Message),
        (status = 400, description = "Invalid bearer token", body = Message),
        (status = 404, description = "No such user", body = Message),
    ),
    tag = "guarita"
)]
#[instrument(skip_all)]
pub async fn profile(
    headers: HeaderMap,
    pool: Extension<PgPool>,
    globals: Extension<GlobalArgs>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let principal = match auth::require_bearer(&headers, &globals) {
        Ok(principal) => principal,
        Err(rejection) => return rejection.into_response(),
    };

    // Any authenticated caller may read any profile; the principal is logged
    // but not compared against the requested id.
    debug!(caller = %principal.user_id, "Profile lookup");

    let Ok(user_id) = Uuid::parse_str(id.trim()) else {
        return (StatusCode::NOT_FOUND, Json(Message::new("User not found"))).into_response();
    };

    match storage::lookup_user(&pool, user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(UserResponse {
                user: PublicUser {
                    id: user.id.to_string(),
                    name: user.name,
                    email: user.email,
                },
            }),
        )
            .into_response(),
        Ok(None) => {
            (StatusCode::NOT_FOUND, Json(Message::new("User not found"))).into_response()
        }
        Err(e) => {
            error!("Error fetching user: {e}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Message::new("Error fetching user")),
            )
                .into_response()
        }
    }
}
