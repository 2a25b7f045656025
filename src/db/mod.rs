mod connection;
pub mod helpers;
mod migrations;
pub mod models;
mod repositories;

pub use connection::Database;
pub use models::{
    normalize_code, MotionCategory, MotionDefinition, MotionInput, MotionOccurrence,
    NewOccurrence, StudyDefinition, StudyRecord, StudyResult, TIME_UNIT_SECONDS,
};
