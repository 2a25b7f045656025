//! Motion catalog data models.

use serde::{Deserialize, Serialize};

/// Seconds per MOD (time-measurement unit).
pub const TIME_UNIT_SECONDS: f64 = 0.129;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MotionCategory {
    Move,
    Get,
    Put,
    Reach,
    Grasp,
    Walk,
    Bend,
    Sit,
    Stand,
    EyeAction,
}

impl MotionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionCategory::Move => "move",
            MotionCategory::Get => "get",
            MotionCategory::Put => "put",
            MotionCategory::Reach => "reach",
            MotionCategory::Grasp => "grasp",
            MotionCategory::Walk => "walk",
            MotionCategory::Bend => "bend",
            MotionCategory::Sit => "sit",
            MotionCategory::Stand => "stand",
            MotionCategory::EyeAction => "eye_action",
        }
    }
}

/// One elemental motion of the predetermined time standard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionDefinition {
    pub code: String,
    pub category: MotionCategory,
    pub description: String,
    pub body_region: String,
    pub mod_value: f64,
    /// Always `mod_value * TIME_UNIT_SECONDS`.
    pub time_seconds: f64,
}

impl MotionDefinition {
    pub fn new(
        code: &str,
        category: MotionCategory,
        description: &str,
        body_region: &str,
        mod_value: f64,
    ) -> Self {
        Self {
            code: normalize_code(code),
            category,
            description: description.to_string(),
            body_region: body_region.to_string(),
            mod_value,
            time_seconds: mod_value * TIME_UNIT_SECONDS,
        }
    }
}

/// Motion codes are matched case-insensitively and stored uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
