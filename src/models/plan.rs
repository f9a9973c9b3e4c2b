use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Day of week. Stored as lowercase text, so the persisted ordering
/// (`ORDER BY day`) is textual, not calendar order; the in-memory plan uses
/// the enum's `Ord` (Monday first) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Display label used by the exporters.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// One generated plan entry as produced by the rule engine, before persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanExercise {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
    pub notes: String,
}

/// Engine output: only explicitly populated days appear as keys; in-day order
/// is the template's authored order.
pub type WeeklyPlan = BTreeMap<Weekday, Vec<PlanExercise>>;

/// One persisted plan entry belonging to a profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prescription {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub day: Weekday,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
    pub notes: String,
    pub position: i32,
}
