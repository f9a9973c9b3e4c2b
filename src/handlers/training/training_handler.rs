use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{helpers::require_record, trainings};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::training::{TrainingResponse, UpsertTrainingRequest};

fn validate(data: &UpsertTrainingRequest) -> Map<String, Value> {
    let mut errors = Map::new();
    if data.title.trim().is_empty() {
        errors.insert("title".into(), json!("Title is required"));
    }
    for (index, exercise) in data.exercises.iter().enumerate() {
        if exercise.name.trim().is_empty() {
            errors.insert(format!("exercises[{}].name", index), json!("Name is required"));
        }
        if exercise.sets < 1 {
            errors.insert(format!("exercises[{}].sets", index), json!("Sets must be positive"));
        }
    }
    errors
}

fn validation_failed(errors: Map<String, Value>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": "Validation failed",
        "errors": errors
    }))
}

#[tracing::instrument(
    name = "Create training",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn create_training(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpsertTrainingRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let errors = validate(&data);
    if !errors.is_empty() {
        return validation_failed(errors);
    }

    let training = match trainings::insert_training(&pool, user_id, &data).await {
        Ok(training) => training,
        Err(e) => {
            tracing::error!("Failed to create training: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create training"));
        }
    };

    match trainings::list_exercises(&pool, training.id).await {
        Ok(exercises) => HttpResponse::Ok().json(ApiResponse::success(
            "Training created",
            TrainingResponse::new(training, exercises),
        )),
        Err(e) => {
            tracing::error!("Database error fetching exercises: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "List trainings",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_trainings(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    match trainings::list_for_user(&pool, user_id).await {
        Ok(items) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": items
        })),
        Err(e) => {
            tracing::error!("Database error listing trainings: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "Get training",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_training(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let training = match require_record(
        trainings::find_owned(&pool, path.into_inner(), user_id).await,
        "Training not found",
    ) {
        Ok(training) => training,
        Err(response) => return response,
    };

    match trainings::list_exercises(&pool, training.id).await {
        Ok(exercises) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": TrainingResponse::new(training, exercises)
        })),
        Err(e) => {
            tracing::error!("Database error fetching exercises: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

/// Unlike every other accessor, the edit action distinguishes a foreign
/// training (403) from a missing one (404).
#[tracing::instrument(
    name = "Update training",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn update_training(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpsertTrainingRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let errors = validate(&data);
    if !errors.is_empty() {
        return validation_failed(errors);
    }

    let training = match require_record(
        trainings::find_by_id(&pool, path.into_inner()).await,
        "Training not found",
    ) {
        Ok(training) => training,
        Err(response) => return response,
    };
    if training.user_id != user_id {
        return HttpResponse::Forbidden().json(
            ApiResponse::<()>::error("You can only edit your own trainings"),
        );
    }

    let updated = match trainings::update_training(&pool, training.id, &data).await {
        Ok(updated) => updated,
        Err(e) => {
            tracing::error!("Failed to update training: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update training"));
        }
    };

    match trainings::list_exercises(&pool, updated.id).await {
        Ok(exercises) => HttpResponse::Ok().json(ApiResponse::success(
            "Training updated",
            TrainingResponse::new(updated, exercises),
        )),
        Err(e) => {
            tracing::error!("Database error fetching exercises: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "Delete training",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn delete_training(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    match trainings::delete_owned(&pool, path.into_inner(), user_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Training deleted")),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Training not found")),
        Err(e) => {
            tracing::error!("Failed to delete training: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete training"))
        }
    }
}
