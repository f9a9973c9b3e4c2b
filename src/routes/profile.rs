use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::profile::plan::{export_plan_pdf, get_training_plan, regenerate_plan};
use crate::handlers::profile::profile::{
    create_profile, delete_profile, get_profile, list_profiles, update_profile,
};
use crate::middleware::auth::Claims;
use crate::models::profile::UpsertProfileRequest;

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpsertProfileRequest>,
) -> HttpResponse {
    create_profile(pool, claims, data).await
}

#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    list_profiles(pool, claims).await
}

#[get("/{id}")]
async fn detail(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    get_profile(pool, claims, path).await
}

#[put("/{id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpsertProfileRequest>,
) -> HttpResponse {
    update_profile(pool, claims, path, data).await
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    delete_profile(pool, claims, path).await
}

#[post("/{id}/generate_plan")]
async fn generate(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    regenerate_plan(pool, claims, path).await
}

#[get("/{id}/plan")]
async fn plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    get_training_plan(pool, claims, path).await
}

#[get("/{id}/export/pdf")]
async fn export_pdf(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    export_plan_pdf(pool, claims, path).await
}
