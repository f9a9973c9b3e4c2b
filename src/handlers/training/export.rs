use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{helpers::require_record, trainings};
use crate::export::sheet::render_training_sheet;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

#[tracing::instrument(
    name = "Export training as sheet",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn export_training_sheet(
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

    let exercises = match trainings::list_exercises(&pool, training.id).await {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::error!("Database error fetching exercises: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    match render_training_sheet(&exercises) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"training_{}.csv\"", training.id),
            ))
            .body(bytes),
        Err(e) => {
            tracing::error!("Sheet rendering failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to render sheet"))
        }
    }
}
