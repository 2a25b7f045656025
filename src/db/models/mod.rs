pub mod motion;
pub mod study;

pub use motion::{normalize_code, MotionCategory, MotionDefinition, TIME_UNIT_SECONDS};
pub use study::{
    MotionInput, MotionOccurrence, NewOccurrence, StudyDefinition, StudyRecord, StudyResult,
};
