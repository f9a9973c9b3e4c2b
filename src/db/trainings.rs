use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::training::{Exercise, ExerciseInput, Training, UpsertTrainingRequest};

#[tracing::instrument(name = "Insert training", skip(pool, data), fields(title = %data.title))]
pub async fn insert_training(
    pool: &PgPool,
    user_id: Uuid,
    data: &UpsertTrainingRequest,
) -> Result<Training, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let now = Utc::now();

    let training = sqlx::query_as::<_, Training>(
        r#"
        INSERT INTO trainings (id, user_id, title, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&data.title)
    .bind(now)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    insert_exercises(&mut tx, training.id, &data.exercises).await?;

    tx.commit().await?;
    Ok(training)
}

async fn insert_exercises(
    tx: &mut Transaction<'_, Postgres>,
    training_id: Uuid,
    exercises: &[ExerciseInput],
) -> Result<(), sqlx::Error> {
    for (position, exercise) in exercises.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO exercises (id, training_id, day, name, sets, reps, rest, notes, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(training_id)
        .bind(exercise.day)
        .bind(&exercise.name)
        .bind(exercise.sets)
        .bind(&exercise.reps)
        .bind(&exercise.rest)
        .bind(&exercise.notes)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Training>, sqlx::Error> {
    sqlx::query_as::<_, Training>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM trainings
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Owner-scoped fetch: a foreign training is indistinguishable from a missing one.
pub async fn find_owned(
    pool: &PgPool,
    training_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Training>, sqlx::Error> {
    sqlx::query_as::<_, Training>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM trainings
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(training_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Unscoped fetch, used only by the update path which distinguishes a missing
/// training (404) from a foreign one (403).
pub async fn find_by_id(pool: &PgPool, training_id: Uuid) -> Result<Option<Training>, sqlx::Error> {
    sqlx::query_as::<_, Training>(
        r#"
        SELECT id, user_id, title, created_at, updated_at
        FROM trainings
        WHERE id = $1
        "#,
    )
    .bind(training_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_exercises(pool: &PgPool, training_id: Uuid) -> Result<Vec<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        r#"
        SELECT id, training_id, day, name, sets, reps, rest, notes, position
        FROM exercises
        WHERE training_id = $1
        ORDER BY position
        "#,
    )
    .bind(training_id)
    .fetch_all(pool)
    .await
}

/// Update the title and replace the exercise list in one transaction.
#[tracing::instrument(name = "Update training", skip(pool, data), fields(title = %data.title))]
pub async fn update_training(
    pool: &PgPool,
    training_id: Uuid,
    data: &UpsertTrainingRequest,
) -> Result<Training, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let training = sqlx::query_as::<_, Training>(
        r#"
        UPDATE trainings
        SET title = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, user_id, title, created_at, updated_at
        "#,
    )
    .bind(training_id)
    .bind(&data.title)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM exercises WHERE training_id = $1")
        .bind(training_id)
        .execute(&mut *tx)
        .await?;
    insert_exercises(&mut tx, training_id, &data.exercises).await?;

    tx.commit().await?;
    Ok(training)
}

pub async fn delete_owned(
    pool: &PgPool,
    training_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM trainings WHERE id = $1 AND user_id = $2")
        .bind(training_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
