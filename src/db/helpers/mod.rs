use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use crate::db::models::MotionCategory;

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_category(value: &str) -> Result<MotionCategory> {
    match value {
        "move" => Ok(MotionCategory::Move),
        "get" => Ok(MotionCategory::Get),
        "put" => Ok(MotionCategory::Put),
        "reach" => Ok(MotionCategory::Reach),
        "grasp" => Ok(MotionCategory::Grasp),
        "walk" => Ok(MotionCategory::Walk),
        "bend" => Ok(MotionCategory::Bend),
        "sit" => Ok(MotionCategory::Sit),
        "stand" => Ok(MotionCategory::Stand),
        "eye_action" => Ok(MotionCategory::EyeAction),
        other => Err(anyhow!("unknown motion category {other}")),
    }
}
