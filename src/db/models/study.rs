//! Study data models.
//!
//! `StudyDefinition` and `MotionOccurrence` are persisted; `StudyResult` is
//! recomputed on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyDefinition {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One use of a catalog motion within a study. Only the code is stored; its
/// time value is resolved against the catalog whenever the study is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionOccurrence {
    pub study_id: String,
    pub motion_code: String,
    pub sequence_order: i64,
    pub quantity: i64,
}

/// A validated occurrence waiting to be written with its study.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOccurrence {
    pub motion_code: String,
    pub sequence_order: i64,
    pub quantity: i64,
}

/// Caller-supplied motion entry for study creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionInput {
    pub code: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl MotionInput {
    pub fn new(code: impl Into<String>, quantity: i64) -> Self {
        Self {
            code: code.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyRecord {
    pub study: StudyDefinition,
    pub occurrences: Vec<MotionOccurrence>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyResult {
    pub study_id: String,
    pub name: String,
    pub total_motions: i64,
    pub total_mods: f64,
    pub base_time_seconds: f64,
    pub allowances_pct: f64,
    pub standard_time_seconds: f64,
    pub units_per_hour: u64,
}
