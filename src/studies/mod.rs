pub mod aggregator;
pub mod calculator;
pub mod commands;

use crate::{
    catalog::MotionCatalog,
    db::{Database, MotionInput, StudyDefinition, StudyResult},
    error::StudyError,
};

use aggregator::{aggregate, tally_occurrences};
use calculator::{compute_totals, StandardTime};

const ENABLE_LOGS: bool = true;

fn build_result(study: &StudyDefinition, time: StandardTime) -> StudyResult {
    StudyResult {
        study_id: study.id.clone(),
        name: study.name.clone(),
        total_motions: time.total_motions,
        total_mods: time.total_mods,
        base_time_seconds: time.base_time_seconds,
        allowances_pct: time.allowances_pct,
        standard_time_seconds: time.standard_time_seconds,
        units_per_hour: time.units_per_hour,
    }
}

pub async fn create_study(
    db: &Database,
    name: &str,
    description: Option<String>,
    motions: Vec<MotionInput>,
) -> Result<StudyResult, StudyError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StudyError::InvalidInput("study name must not be empty".into()));
    }
    let description = description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    // Validate against a catalog snapshot before anything is written.
    let catalog = MotionCatalog::load(db).await?;
    let aggregated = aggregate(&motions, &catalog)?;

    let record = db
        .create_study_atomic(name.to_string(), description, aggregated.occurrences)
        .await?;

    crate::log_info!(
        "Created study {} ({} occurrences, {} mods)",
        record.study.id,
        record.occurrences.len(),
        aggregated.totals.total_mods
    );

    Ok(build_result(&record.study, compute_totals(&aggregated.totals)))
}

/// Recompute a stored study against the catalog as it is now.
pub async fn get_study(db: &Database, study_id: &str) -> Result<StudyResult, StudyError> {
    let record = db
        .get_study_with_occurrences(study_id)
        .await?
        .ok_or_else(|| StudyError::study_not_found(study_id))?;

    crate::log_debug!(
        "Recomputing study {} from {} occurrences",
        record.study.id,
        record.occurrences.len()
    );

    let catalog = MotionCatalog::load(db).await?;
    let totals = tally_occurrences(&record.occurrences, &catalog);

    Ok(build_result(&record.study, compute_totals(&totals)))
}
