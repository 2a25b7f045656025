use serde::{Deserialize, Serialize};

use crate::{
    db::{MotionInput, StudyResult},
    error::CommandError,
    AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudyInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub motions: Vec<MotionInput>,
}

pub async fn create_study(
    state: &AppState,
    input: CreateStudyInput,
) -> Result<StudyResult, CommandError> {
    let db = &state.db;
    super::create_study(db, &input.name, input.description, input.motions)
        .await
        .map_err(CommandError::from)
}

pub async fn get_study(state: &AppState, study_id: String) -> Result<StudyResult, CommandError> {
    let db = &state.db;
    super::get_study(db, &study_id)
        .await
        .map_err(CommandError::from)
}
