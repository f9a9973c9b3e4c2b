//! Persistence adapter for generated plans: the whole prescription set of a
//! profile is replaced in one transaction, never merged.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::plan::{Prescription, WeeklyPlan};

#[derive(Debug, Error)]
pub enum ReplacePlanError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Replace a profile's entire prescription set with the engine's output.
///
/// Runs as a single transaction: the profile row is locked first, which both
/// serializes concurrent regenerations for the same profile and turns a
/// vanished profile into `ProfileNotFound`. Any failure rolls the delete back,
/// so the profile is never left with a partial or empty set.
#[tracing::instrument(name = "Replace training plan", skip(pool, plan))]
pub async fn replace_plan(
    pool: &PgPool,
    profile_id: Uuid,
    plan: &WeeklyPlan,
) -> Result<u64, ReplacePlanError> {
    let mut tx = pool.begin().await?;

    let locked = sqlx::query("SELECT id FROM user_profiles WHERE id = $1 FOR UPDATE")
        .bind(profile_id)
        .fetch_optional(&mut *tx)
        .await?;
    if locked.is_none() {
        return Err(ReplacePlanError::ProfileNotFound);
    }

    sqlx::query("DELETE FROM prescriptions WHERE profile_id = $1")
        .bind(profile_id)
        .execute(&mut *tx)
        .await?;

    let mut inserted = 0u64;
    for (day, entries) in plan {
        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO prescriptions (id, profile_id, day, exercise_name, sets, reps, rest, notes, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(profile_id)
            .bind(*day)
            .bind(&entry.name)
            .bind(entry.sets)
            .bind(&entry.reps)
            .bind(&entry.rest)
            .bind(&entry.notes)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Current prescriptions for a profile, ordered by day then in-day position.
/// Day is text, so this is textual day order, not calendar order.
pub async fn list_for_profile(
    pool: &PgPool,
    profile_id: Uuid,
) -> Result<Vec<Prescription>, sqlx::Error> {
    sqlx::query_as::<_, Prescription>(
        r#"
        SELECT id, profile_id, day, exercise_name, sets, reps, rest, notes, position
        FROM prescriptions
        WHERE profile_id = $1
        ORDER BY day, position
        "#,
    )
    .bind(profile_id)
    .fetch_all(pool)
    .await
}
