use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::api::handlers::Message;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = Message, content_type = "application/json"),
    ),
    tag = "guarita"
)]
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(Message::new("Welcome to guarita!")))
}
