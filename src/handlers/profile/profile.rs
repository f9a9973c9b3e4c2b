use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{helpers::require_record, prescriptions, profiles};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::profile::{ProfileResponse, UpsertProfileRequest};
use crate::plan::generate_plan;

const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 80;

/// Field-level validation of profile input. Returns an empty map when valid.
fn validate(data: &UpsertProfileRequest) -> Map<String, Value> {
    let mut errors = Map::new();
    if data.age < MIN_AGE || data.age > MAX_AGE {
        errors.insert(
            "age".into(),
            json!(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE)),
        );
    }
    if data.height <= 0.0 {
        errors.insert("height".into(), json!("Height must be positive"));
    }
    if data.weight <= 0.0 {
        errors.insert("weight".into(), json!("Weight must be positive"));
    }
    errors
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

fn validation_failed(errors: Map<String, Value>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "success": false,
        "message": "Validation failed",
        "errors": errors
    }))
}

#[tracing::instrument(
    name = "Create profile",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn create_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    data: web::Json<UpsertProfileRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let errors = validate(&data);
    if !errors.is_empty() {
        return validation_failed(errors);
    }

    // A second create is not an error: hand back the existing profile with a warning.
    match profiles::find_by_user(&pool, user_id).await {
        Ok(Some(existing)) => {
            tracing::info!("User already has a profile, returning it");
            return HttpResponse::Ok().json(ApiResponse::success(
                "Profile already exists",
                ProfileResponse::from(existing),
            ));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Database error checking for existing profile: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    }

    let profile = match profiles::insert_profile(&pool, user_id, &data).await {
        Ok(profile) => profile,
        // Two concurrent creates can both pass the existence check; the unique
        // constraint on user_id decides, and the loser gets the winner's profile.
        Err(e) if is_unique_violation(&e) => {
            return match profiles::find_by_user(&pool, user_id).await {
                Ok(Some(existing)) => HttpResponse::Ok().json(ApiResponse::success(
                    "Profile already exists",
                    ProfileResponse::from(existing),
                )),
                _ => HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Database error")),
            };
        }
        Err(e) => {
            tracing::error!("Failed to insert profile: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create profile"));
        }
    };

    // The initial plan is generated right after creation.
    let plan = generate_plan(profile.goal, profile.fitness_level);
    if let Err(e) = prescriptions::replace_plan(&pool, profile.id, &plan).await {
        tracing::error!("Failed to store generated plan: {}", e);
        return HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Profile created but plan generation failed"));
    }

    tracing::info!("Created profile {} for user {}", profile.id, claims.username);
    HttpResponse::Ok().json(ApiResponse::success(
        "Profile created",
        ProfileResponse::from(profile),
    ))
}

#[tracing::instrument(
    name = "List profiles",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_profiles(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    match profiles::find_by_user(&pool, user_id).await {
        Ok(profile) => {
            let data: Vec<ProfileResponse> =
                profile.into_iter().map(ProfileResponse::from).collect();
            HttpResponse::Ok().json(json!({
                "success": true,
                "data": data
            }))
        }
        Err(e) => {
            tracing::error!("Database error listing profiles: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "Get profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };
    let profile_id = path.into_inner();

    let profile = match require_record(
        profiles::find_owned(&pool, profile_id, user_id).await,
        "Profile not found",
    ) {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    match prescriptions::list_for_profile(&pool, profile.id).await {
        Ok(items) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "profile": ProfileResponse::from(profile),
                "prescriptions": items
            }
        })),
        Err(e) => {
            tracing::error!("Database error fetching prescriptions: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

#[tracing::instrument(
    name = "Update profile",
    skip(pool, claims, data),
    fields(username = %claims.username)
)]
pub async fn update_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
    data: web::Json<UpsertProfileRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    let errors = validate(&data);
    if !errors.is_empty() {
        return validation_failed(errors);
    }

    // Updating a profile does not regenerate its plan; that stays an explicit call.
    match require_record(
        profiles::update_owned(&pool, path.into_inner(), user_id, &data).await,
        "Profile not found",
    ) {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(
            "Profile updated",
            ProfileResponse::from(profile),
        )),
        Err(response) => response,
    }
}

#[tracing::instrument(
    name = "Delete profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn delete_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID")),
    };

    match profiles::delete_owned(&pool, path.into_inner(), user_id).await {
        Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Profile deleted")),
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Profile not found")),
        Err(e) => {
            tracing::error!("Failed to delete profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete profile"))
        }
    }
}
