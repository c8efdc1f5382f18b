//! Database access for user records.
//!
//! The `users.email` unique constraint is the conflict signal for duplicate
//! registrations; there is no separate existence read, so concurrent
//! registrations with the same email cannot both succeed.

use sqlx::{PgPool, Row};
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Full credential row fetched for password verification during login.
pub(crate) struct Credentials {
    pub user_id: Uuid,
    pub password_hash: String,
}

/// Public user record with the password hash projected out.
pub(crate) struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

pub(crate) enum InsertOutcome {
    Created(Uuid),
    Conflict,
}

pub(crate) async fn insert_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<InsertOutcome, sqlx::Error> {
    let query = "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    match sqlx::query(query)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .instrument(span)
        .await
    {
        Ok(row) => Ok(InsertOutcome::Created(row.get("id"))),
        Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
        Err(err) => Err(err),
    }
}

pub(crate) async fn lookup_credentials(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Credentials>, sqlx::Error> {
    let query = "SELECT id, password FROM users WHERE email = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(email)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(row.map(|row| Credentials {
        user_id: row.get("id"),
        password_hash: row.get("password"),
    }))
}

pub(crate) async fn lookup_user(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<UserRecord>, sqlx::Error> {
    let query = "SELECT id, name, email FROM users WHERE id = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(span)
        .await?;

    Ok(row.map(|row| UserRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
    }))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
