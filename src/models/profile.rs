use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Stored as lowercase text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
    Health,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Strength => "strength",
            Goal::Endurance => "endurance",
            Goal::Health => "health",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::MuscleGain => "Muscle gain",
            Goal::Strength => "Strength",
            Goal::Endurance => "Endurance",
            Goal::Health => "General health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

/// One fitness profile per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Body-mass index, rounded to one decimal.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        (self.weight / (height_m * height_m) * 10.0).round() / 10.0
    }
}

/// Payload for both profile creation and update; bounds are checked in the handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpsertProfileRequest {
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub goal: Goal,
    pub fitness_level: FitnessLevel,
    pub bmi: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let bmi = profile.bmi();
        Self {
            id: profile.id,
            user_id: profile.user_id,
            age: profile.age,
            height: profile.height,
            weight: profile.weight,
            gender: profile.gender,
            goal: profile.goal,
            fitness_level: profile.fitness_level,
            bmi,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
