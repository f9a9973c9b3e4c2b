use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{Profile, UpsertProfileRequest};

#[tracing::instrument(name = "Insert profile", skip(pool, data))]
pub async fn insert_profile(
    pool: &PgPool,
    user_id: Uuid,
    data: &UpsertProfileRequest,
) -> Result<Profile, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO user_profiles (id, user_id, age, height, weight, gender, goal, fitness_level, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, user_id, age, height, weight, gender, goal, fitness_level, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(data.age)
    .bind(data.height)
    .bind(data.weight)
    .bind(data.gender)
    .bind(data.goal)
    .bind(data.fitness_level)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Fetch a profile only if it belongs to `user_id`. A foreign profile comes
/// back as `None`, same as a missing one.
pub async fn find_owned(
    pool: &PgPool,
    profile_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, user_id, age, height, weight, gender, goal, fitness_level, created_at, updated_at
        FROM user_profiles
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(profile_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, user_id, age, height, weight, gender, goal, fitness_level, created_at, updated_at
        FROM user_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Update profile", skip(pool, data))]
pub async fn update_owned(
    pool: &PgPool,
    profile_id: Uuid,
    user_id: Uuid,
    data: &UpsertProfileRequest,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"
        UPDATE user_profiles
        SET age = $3, height = $4, weight = $5, gender = $6, goal = $7, fitness_level = $8, updated_at = $9
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, age, height, weight, gender, goal, fitness_level, created_at, updated_at
        "#,
    )
    .bind(profile_id)
    .bind(user_id)
    .bind(data.age)
    .bind(data.height)
    .bind(data.weight)
    .bind(data.gender)
    .bind(data.goal)
    .bind(data.fitness_level)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Delete an owned profile; prescriptions go with it via cascade.
pub async fn delete_owned(
    pool: &PgPool,
    profile_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1 AND user_id = $2")
        .bind(profile_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
