use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use chrono::Utc;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    match insert_user(&user_form, &pool).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("User registered")),
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Registration rejected, username or email already taken");
            HttpResponse::Conflict().json(ApiResponse::<()>::error("Username or email already taken"))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn insert_user(
    user_form: &web::Json<RegistrationRequest>,
    pool: &PgPool
) -> Result<(), sqlx::Error> {
    let now = Utc::now();
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&user_form.username)
    .bind(&user_form.email)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;
    Ok(())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
