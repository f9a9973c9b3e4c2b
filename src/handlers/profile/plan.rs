use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::prescriptions::{self, ReplacePlanError};
use crate::db::{helpers::require_record, profiles};
use crate::export::pdf::render_plan_pdf;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::plan::generate_plan;

#[tracing::instrument(
    name = "Get training plan",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_training_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let profile = match require_record(
        profiles::find_owned(&pool, path.into_inner(), user_id).await,
        "Profile not found",
    ) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    match prescriptions::list_for_profile(&pool, profile.id).await {
        Ok(items) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": items
        })),
        Err(e) => {
            tracing::error!("Database error fetching prescriptions: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

/// Regenerate the plan from the profile's current goal and fitness level.
/// Destructive by design: the previous prescription set is discarded whole.
#[tracing::instrument(
    name = "Regenerate training plan",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn regenerate_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let profile = match require_record(
        profiles::find_owned(&pool, path.into_inner(), user_id).await,
        "Profile not found",
    ) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    let plan = generate_plan(profile.goal, profile.fitness_level);
    match prescriptions::replace_plan(&pool, profile.id, &plan).await {
        Ok(count) => {
            tracing::info!("Regenerated plan for profile {}: {} prescriptions", profile.id, count);
        }
        Err(ReplacePlanError::ProfileNotFound) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("Profile not found"));
        }
        Err(ReplacePlanError::Database(e)) => {
            tracing::error!("Failed to regenerate plan: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to regenerate training plan"));
        }
    }

    match prescriptions::list_for_profile(&pool, profile.id).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Training plan regenerated", items)),
        Err(e) => {
            tracing::error!("Database error fetching regenerated plan: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "Export training plan as PDF",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn export_plan_pdf(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let profile = match require_record(
        profiles::find_owned(&pool, path.into_inner(), user_id).await,
        "Profile not found",
    ) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    let items = match prescriptions::list_for_profile(&pool, profile.id).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Database error fetching prescriptions: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    match render_plan_pdf(&claims.email, &profile, &items) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"training_plan_{}.pdf\"", claims.username),
            ))
            .body(bytes),
        Err(e) => {
            tracing::error!("PDF rendering failed: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to render PDF"))
        }
    }
}
