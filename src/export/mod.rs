//! Document exporters: a paginated PDF for a profile's generated plan and a
//! flat CSV sheet for a user-authored training. Both consume persisted rows
//! read-only.

pub mod error;
pub mod pdf;
pub mod sheet;

pub use error::ExportError;
