//! Flat tabular export of a training: a fixed six-column header and one row
//! per exercise, no grouping.

use crate::export::error::ExportError;
use crate::models::training::Exercise;

pub const SHEET_HEADER: [&str; 6] = ["Day", "Exercise", "Sets", "Reps", "Rest", "Notes"];

pub fn render_training_sheet(exercises: &[Exercise]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(SHEET_HEADER)?;

    for exercise in exercises {
        let sets = exercise.sets.to_string();
        writer.write_record([
            exercise.day.label(),
            exercise.name.as_str(),
            sets.as_str(),
            exercise.reps.as_str(),
            exercise.rest.as_str(),
            exercise.notes.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Sheet(e.to_string()))
}
