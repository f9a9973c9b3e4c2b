//! Database query helper functions to reduce boilerplate error handling.

use actix_web::HttpResponse;
use serde_json::json;

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

/// Unwrap an optional database result, returning NotFound if None.
///
/// Ownership concealment relies on this: a record that exists but belongs to
/// another user is fetched through an owner-scoped query and surfaces here as
/// `None`, indistinguishable from true absence.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": not_found_message
        }))),
        Err(e) => {
            tracing::error!("Database error: {}", e);
            Err(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Database error"
            })))
        }
    }
}
