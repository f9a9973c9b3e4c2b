//! Rule engine mapping a profile's (goal, fitness level) to a weekly plan.

use crate::models::plan::{PlanExercise, WeeklyPlan};
use crate::models::profile::{FitnessLevel, Goal};

use super::templates::{self, Template, TemplateExercise};

const MIN_SETS: i32 = 2;

/// Token marking a duration-style reps entry ("20-30 мин" as opposed to "8-12").
const DURATION_TOKEN: &str = "мин";

/// Literal substring substitutions applied to duration-style reps entries for
/// beginners. This is a finite text transform, not numeric range parsing:
/// a duration outside the table ("22-32 мин") passes through unchanged.
const DURATION_SUBSTITUTIONS: [(&str, &str); 2] = [("25-35", "15-25"), ("20-30", "10-20")];

/// Produce the weekly plan for a goal and fitness level. Pure and
/// deterministic: identical inputs always yield identical output.
pub fn generate_plan(goal: Goal, level: FitnessLevel) -> WeeklyPlan {
    template_for_goal(goal)
        .iter()
        .map(|(day, entries)| {
            (*day, entries.iter().map(|entry| apply_level(entry, level)).collect())
        })
        .collect()
}

fn template_for_goal(goal: Goal) -> &'static Template {
    match goal {
        Goal::WeightLoss => &templates::WEIGHT_LOSS,
        Goal::MuscleGain => &templates::MUSCLE_GAIN,
        Goal::Strength => &templates::STRENGTH,
        // Endurance has no dedicated table and shares the general health plan.
        Goal::Endurance | Goal::Health => &templates::HEALTH,
    }
}

fn apply_level(entry: &TemplateExercise, level: FitnessLevel) -> PlanExercise {
    let (sets, reps) = match level {
        FitnessLevel::Beginner => ((entry.sets - 1).max(MIN_SETS), adjust_duration(entry.reps)),
        // No upward adjustment for advanced; both pass the template through.
        FitnessLevel::Intermediate | FitnessLevel::Advanced => (entry.sets, entry.reps.to_string()),
    };
    PlanExercise {
        name: entry.name.to_string(),
        sets,
        reps,
        rest: entry.rest.to_string(),
        notes: String::new(),
    }
}

fn adjust_duration(reps: &str) -> String {
    if !reps.contains(DURATION_TOKEN) {
        return reps.to_string();
    }
    let mut adjusted = reps.to_string();
    for (from, to) in DURATION_SUBSTITUTIONS {
        adjusted = adjusted.replace(from, to);
    }
    adjusted
}
