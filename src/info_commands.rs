use serde::Serialize;

use crate::{error::CommandError, error::StudyError, AppState};

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub database: String,
    pub motion_count: usize,
    pub study_count: usize,
}

pub async fn service_info(state: &AppState) -> Result<ServiceInfo, CommandError> {
    let db = &state.db;
    let motion_count = db.count_motions().await.map_err(StudyError::from)?;
    let study_count = db.count_studies().await.map_err(StudyError::from)?;

    Ok(ServiceInfo {
        name: "OpenPTS",
        description: "Open Predetermined Time Standards - industrial time study calculations",
        version: env!("CARGO_PKG_VERSION"),
        status: "healthy",
        database: db.path().display().to_string(),
        motion_count,
        study_count,
    })
}
