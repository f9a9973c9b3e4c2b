use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::plan::Weekday;

/// A user-authored training, independent of the plan generator.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Training {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: Uuid,
    pub training_id: Uuid,
    pub day: Weekday,
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
    pub notes: String,
    pub position: i32,
}

fn default_rest() -> String {
    "60 сек".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseInput {
    pub day: Weekday,
    pub name: String,
    pub sets: i32,
    pub reps: String,
    #[serde(default = "default_rest")]
    pub rest: String,
    #[serde(default)]
    pub notes: String,
}

/// Payload for creating a training and for replacing its content on update.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertTrainingRequest {
    pub title: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

#[derive(Debug, Serialize)]
pub struct TrainingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub exercises: Vec<Exercise>,
}

impl TrainingResponse {
    pub fn new(training: Training, exercises: Vec<Exercise>) -> Self {
        Self {
            id: training.id,
            user_id: training.user_id,
            title: training.title,
            created_at: training.created_at,
            updated_at: training.updated_at,
            exercises,
        }
    }
}
