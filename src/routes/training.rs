use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::training::export::export_training_sheet;
use crate::handlers::training::training_handler::{
    create_training, delete_training, get_training, list_trainings, update_training,
};
use crate::middleware::auth::Claims;
use crate::models::training::UpsertTrainingRequest;

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpsertTrainingRequest>,
) -> HttpResponse {
    create_training(pool, claims, data).await
}

#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    list_trainings(pool, claims).await
}

#[get("/{id}")]
async fn detail(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    get_training(pool, claims, path).await
}

#[put("/{id}")]
async fn update(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpsertTrainingRequest>,
) -> HttpResponse {
    update_training(pool, claims, path, data).await
}

#[delete("/{id}")]
async fn remove(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    delete_training(pool, claims, path).await
}

#[get("/{id}/export/sheet")]
async fn export_sheet(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    export_training_sheet(pool, claims, path).await
}
